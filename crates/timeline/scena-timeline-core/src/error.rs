//! Errors surfaced while constructing or loading timelines.
//!
//! `Timeline::query_at_time` itself never fails: malformed directive data
//! is rejected up front, so all failure handling is a construction-time
//! concern for the owning host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{list} directive {index}: interval must satisfy start_time < end_time (got {start_time}..{end_time})")]
    InvalidInterval {
        list: &'static str,
        index: usize,
        start_time: f32,
        end_time: f32,
    },
    #[error("{list} directive {index}: time bounds must be finite (got {start_time}..{end_time})")]
    NonFiniteTime {
        list: &'static str,
        index: usize,
        start_time: f32,
        end_time: f32,
    },
}
