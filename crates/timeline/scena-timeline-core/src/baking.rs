#![allow(dead_code)]
//! Baking API: produce frame-stamped snapshots of a timeline over a window.
//!
//! Baked frames capture instantaneous state only; the forward sequences
//! depend on the queried playhead and stay a live-query concern.

use serde::{Deserialize, Serialize};

use crate::outputs::ActingState;
use crate::timeline::Timeline;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time (seconds) in timeline space.
    pub start_time: f32,
    /// End time (seconds); if None, uses the latest directive end_time.
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            start_time: 0.0,
            end_time: None,
        }
    }
}

/// One frame-stamped presentation snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedFrame {
    pub time: f32,
    pub staging: bool,
    pub acting: ActingState,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakedTimeline {
    pub name: String,
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    pub frames: Vec<BakedFrame>,
}

/// Bake a timeline using the provided config.
pub fn bake_timeline(timeline: &Timeline, cfg: &BakingConfig) -> BakedTimeline {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        60.0
    };
    let sr = sr.max(1.0);
    let start = if cfg.start_time.is_finite() {
        cfg.start_time
    } else {
        0.0
    };
    let timeline_end = timeline.data().end_time();
    let mut end = cfg.end_time.unwrap_or(timeline_end);
    if !end.is_finite() {
        end = timeline_end;
    }
    let end = end.max(start);
    let span = end - start;
    let frames_f = (span * sr).ceil();
    let frame_count = frames_f as usize + 1; // inclusive of end

    let mut frames = Vec::with_capacity(frame_count);
    for f in 0..frame_count {
        let t = start + (f as f32) / sr;
        let result = timeline.query_at_time(t);
        frames.push(BakedFrame {
            time: t,
            staging: result.staging_state,
            acting: result.acting_state,
        });
    }

    BakedTimeline {
        name: timeline.data().name.clone(),
        frame_rate: sr,
        start_time: start,
        end_time: end,
        frames,
    }
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedTimeline) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
