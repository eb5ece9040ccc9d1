//! Stored-timeline JSON loader.
//!
//! Public API: parse StoredTimeline-style JSON (the camelCase authoring
//! format, see fixtures/timelines/*.json) into the canonical TimelineData
//! (data.rs).
//!
//! Notes:
//! - Times are kept in the authoring unit (seconds by convention).
//! - Wire positions are `{x, y, z}` objects; missing `staging`/`acting`
//!   arrays deserialize as empty lists.
//! - The loader runs the same interval validation as `Timeline::new`, so
//!   malformed directives never reach the query path.

use serde::Deserialize;

use crate::data::{ActingDirective, StagingDirective, TimelineData, Vec3};
use crate::error::TimelineError;

pub fn parse_stored_timeline_json(s: &str) -> Result<TimelineData, TimelineError> {
    let st: StoredTimeline = serde_json::from_str(s)?;

    let staging = st
        .staging
        .into_iter()
        .map(|d| StagingDirective {
            start_time: d.start_time as f32,
            end_time: d.end_time as f32,
            enabled: d.enabled,
        })
        .collect();

    let acting = st
        .acting
        .into_iter()
        .map(|d| ActingDirective {
            start_time: d.start_time as f32,
            end_time: d.end_time as f32,
            enabled: d.enabled,
            start_position: to_vec3(d.start_position),
            end_position: to_vec3(d.end_position),
            anim: d.anim,
        })
        .collect();

    let data = TimelineData {
        name: st.name,
        staging,
        acting,
    };
    data.validate_basic()?;
    Ok(data)
}

fn to_vec3(v: RawVec3) -> Vec3 {
    Vec3 {
        x: v.x as f32,
        y: v.y as f32,
        z: v.z as f32,
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredTimeline {
    pub name: String,
    #[serde(default)]
    pub staging: Vec<RawStaging>,
    #[serde(default)]
    pub acting: Vec<RawActing>,
}

#[derive(Debug, Deserialize)]
struct RawStaging {
    #[serde(rename = "startTime")]
    pub start_time: f64,
    #[serde(rename = "endTime")]
    pub end_time: f64,
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
struct RawActing {
    #[serde(rename = "startTime")]
    pub start_time: f64,
    #[serde(rename = "endTime")]
    pub end_time: f64,
    pub enabled: bool,
    #[serde(rename = "startPosition")]
    pub start_position: RawVec3,
    #[serde(rename = "endPosition")]
    pub end_position: RawVec3,
    #[serde(default)]
    pub anim: String,
}

#[derive(Debug, Copy, Clone, Deserialize)]
struct RawVec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
