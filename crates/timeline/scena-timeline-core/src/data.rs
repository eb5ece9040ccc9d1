#![allow(dead_code)]
//! Canonical timeline data model (staging/acting directives).
//!
//! Directives are plain values; the model never mutates them in place.
//! Both variants tag the half-open interval [start_time, end_time) with an
//! enabled flag; acting directives add motion waypoints and a clip label.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// 3D vector used for acting waypoints.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Shared interval view over both directive kinds.
///
/// Intervals are half-open: `contains` is true for t == start_time and
/// false for t == end_time. `with_start_time` is a value-type
/// copy-with-update used when clipping the forward sequence to the
/// playhead.
pub trait Directive: Clone {
    fn start_time(&self) -> f32;
    fn end_time(&self) -> f32;
    fn enabled(&self) -> bool;
    /// Copy of this directive with `start_time` replaced, all other fields
    /// identical.
    fn with_start_time(&self, start_time: f32) -> Self;

    #[inline]
    fn contains(&self, t: f32) -> bool {
        self.start_time() <= t && t < self.end_time()
    }
}

/// Toggles a binary presentation flag (e.g. ground/visibility) over its
/// interval.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StagingDirective {
    pub start_time: f32,
    pub end_time: f32,
    pub enabled: bool,
}

impl StagingDirective {
    pub fn new(start_time: f32, end_time: f32, enabled: bool) -> Self {
        Self {
            start_time,
            end_time,
            enabled,
        }
    }
}

impl Directive for StagingDirective {
    fn start_time(&self) -> f32 {
        self.start_time
    }
    fn end_time(&self) -> f32 {
        self.end_time
    }
    fn enabled(&self) -> bool {
        self.enabled
    }
    fn with_start_time(&self, start_time: f32) -> Self {
        Self {
            start_time,
            ..self.clone()
        }
    }
}

/// Describes interpolated motion between two waypoints plus an animation
/// clip label over its interval. `anim` is free-form and may be empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActingDirective {
    pub start_time: f32,
    pub end_time: f32,
    pub enabled: bool,
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub anim: String,
}

impl ActingDirective {
    pub fn new(
        start_time: f32,
        end_time: f32,
        enabled: bool,
        start_position: Vec3,
        end_position: Vec3,
        anim: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            enabled,
            start_position,
            end_position,
            anim: anim.into(),
        }
    }
}

impl Directive for ActingDirective {
    fn start_time(&self) -> f32 {
        self.start_time
    }
    fn end_time(&self) -> f32 {
        self.end_time
    }
    fn enabled(&self) -> bool {
        self.enabled
    }
    fn with_start_time(&self, start_time: f32) -> Self {
        Self {
            start_time,
            ..self.clone()
        }
    }
}

/// Explicit configuration struct holding both directive lists.
///
/// List order is significant: it is the tie-break order when directives
/// overlap (earlier position wins). Lists are expected to be
/// non-overlapping, time-ascending partitions, but that is not enforced.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TimelineData {
    pub name: String,
    #[serde(default)]
    pub staging: Vec<StagingDirective>,
    #[serde(default)]
    pub acting: Vec<ActingDirective>,
}

impl TimelineData {
    /// Validate basic invariants: every interval finite and start < end.
    /// Overlap is legal and resolved by list order at query time.
    pub fn validate_basic(&self) -> Result<(), TimelineError> {
        for (index, d) in self.staging.iter().enumerate() {
            validate_interval("staging", index, d.start_time, d.end_time)?;
        }
        for (index, d) in self.acting.iter().enumerate() {
            validate_interval("acting", index, d.start_time, d.end_time)?;
        }
        Ok(())
    }

    /// Latest end_time across both lists (0.0 when empty). Used as the
    /// default baking window.
    pub fn end_time(&self) -> f32 {
        let staging = self.staging.iter().map(|d| d.end_time);
        let acting = self.acting.iter().map(|d| d.end_time);
        staging.chain(acting).fold(0.0, f32::max)
    }
}

fn validate_interval(
    list: &'static str,
    index: usize,
    start_time: f32,
    end_time: f32,
) -> Result<(), TimelineError> {
    if !start_time.is_finite() || !end_time.is_finite() {
        return Err(TimelineError::NonFiniteTime {
            list,
            index,
            start_time,
            end_time,
        });
    }
    if start_time >= end_time {
        return Err(TimelineError::InvalidInterval {
            list,
            index,
            start_time,
            end_time,
        });
    }
    Ok(())
}
