#![allow(dead_code)]
//! Scena Timeline Core (engine-agnostic)
//!
//! A deterministic, time-indexed query engine over two parallel lists of
//! interval-tagged directives (staging and acting). The model owns a
//! validated directive set and exposes one pure operation,
//! `Timeline::query_at_time`, which derives the instantaneous staging
//! flag, the interpolated acting state, and the forward-looking remainder
//! of each directive list clipped to the playhead. Rendering, audio
//! transport, and input handling are host concerns.

pub mod baking;
pub mod data;
pub mod error;
pub mod interp;
pub mod outputs;
pub mod stored_timeline;
pub mod timeline;

// Re-exports for consumers (adapters)
pub use baking::{bake_timeline, export_baked_json, BakedFrame, BakedTimeline, BakingConfig};
pub use data::{ActingDirective, Directive, StagingDirective, TimelineData, Vec3};
pub use error::TimelineError;
pub use outputs::{ActingState, QueryResult};
pub use stored_timeline::parse_stored_timeline_json;
pub use timeline::Timeline;
