#![allow(dead_code)]
//! Timeline model: data ownership and the pure query operation.
//!
//! Methods:
//! - new (validating constructor), data, query_at_time

use crate::data::{ActingDirective, Directive, TimelineData};
use crate::error::TimelineError;
use crate::interp::lerp_vec3;
use crate::outputs::{ActingState, QueryResult};

/// Owns a validated, immutable directive set and answers playhead queries.
///
/// Overlapping directives are resolved by list order: the first directive
/// covering the playhead wins. Directive intervals are half-open
/// [start_time, end_time).
#[derive(Clone, Debug)]
pub struct Timeline {
    data: TimelineData,
}

impl Timeline {
    /// Build a timeline, rejecting inverted, zero-length, or non-finite
    /// intervals. Overlap is accepted.
    pub fn new(data: TimelineData) -> Result<Self, TimelineError> {
        data.validate_basic()?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &TimelineData {
        &self.data
    }

    /// Answer "what is the presentation state at time `t`?" and "what
    /// remains of the schedule from `t` onward?".
    ///
    /// Pure and deterministic: any finite `t` is valid (before the first
    /// or after the last directive yields the "nothing active" defaults),
    /// and repeated calls with the same `t` return structurally equal
    /// results. Linear in the number of directives per list.
    pub fn query_at_time(&self, t: f32) -> QueryResult {
        let staging_state = first_covering(&self.data.staging, t)
            .map(|d| d.enabled)
            .unwrap_or(false);

        let acting_state = self
            .data
            .acting
            .iter()
            .find(|d| d.contains(t) && d.enabled)
            .map(|d| acting_state_at(d, t))
            .unwrap_or_default();

        QueryResult {
            staging_state,
            acting_state,
            staging_sequence: remaining_from(&self.data.staging, t),
            acting_sequence: remaining_from(&self.data.acting, t),
        }
    }
}

/// First directive in stored order covering `t` (the overlap tie-break).
fn first_covering<D: Directive>(list: &[D], t: f32) -> Option<&D> {
    list.iter().find(|d| d.contains(t))
}

/// Interpolated acting state inside an enabled directive.
///
/// `progress` is intentionally unclamped: `contains` already bounds it to
/// [0, 1), and start_time < end_time is a construction invariant.
fn acting_state_at(d: &ActingDirective, t: f32) -> ActingState {
    let progress = (t - d.start_time) / (d.end_time - d.start_time);
    ActingState {
        enabled: true,
        position: lerp_vec3(d.start_position, d.end_position, progress),
        anim: d.anim.clone(),
    }
}

/// Forward sequence from `t`: directives entirely in the past are dropped,
/// the one covering `t` is clipped to start at `t`, future directives pass
/// through unchanged. Relative order is preserved.
fn remaining_from<D: Directive>(list: &[D], t: f32) -> Vec<D> {
    list.iter()
        .filter(|d| t < d.end_time())
        .map(|d| {
            if d.start_time() <= t {
                d.with_start_time(t)
            } else {
                d.clone()
            }
        })
        .collect()
}
