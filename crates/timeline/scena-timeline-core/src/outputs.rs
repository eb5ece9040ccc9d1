#![allow(dead_code)]
//! Query result contracts.
//!
//! A `QueryResult` is a transient snapshot recomputed in full on every
//! query; it holds no references back to the timeline. Hosts map
//! `staging_state` to a visibility toggle, `acting_state` to a transform
//! and clip selection, and the sequences to a forward schedule.

use serde::{Deserialize, Serialize};

use crate::data::{ActingDirective, StagingDirective, Vec3};

/// Instantaneous acting state at the queried playhead time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActingState {
    pub enabled: bool,
    pub position: Vec3,
    pub anim: String,
}

impl Default for ActingState {
    /// The "nothing active" state: disabled at the origin with no clip.
    fn default() -> Self {
        Self {
            enabled: false,
            position: Vec3::ZERO,
            anim: String::new(),
        }
    }
}

/// Full snapshot returned by `Timeline::query_at_time`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    pub staging_state: bool,
    pub acting_state: ActingState,
    /// Remaining staging directives from the playhead onward, the active
    /// one (if any) clipped to start at the playhead.
    #[serde(default)]
    pub staging_sequence: Vec<StagingDirective>,
    /// Same transformation over the acting list.
    #[serde(default)]
    pub acting_sequence: Vec<ActingDirective>,
}
