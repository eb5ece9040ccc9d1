use scena_timeline_core::{
    baking::{bake_timeline, export_baked_json, BakingConfig},
    parse_stored_timeline_json,
    timeline::Timeline,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn walk_timeline() -> Timeline {
    let json = scena_test_fixtures::timelines::json("walk-performance")
        .expect("load walk-performance fixture");
    let data = parse_stored_timeline_json(&json).expect("parse stored timeline");
    Timeline::new(data).expect("fixture is well-formed")
}

/// it should bake frame_rate * span + 1 frames inclusive of the window end
#[test]
fn baking_frame_counts_and_stamps() {
    let tl = walk_timeline();
    let cfg = BakingConfig {
        frame_rate: 10.0,
        start_time: 0.0,
        end_time: None,
    };
    let baked = bake_timeline(&tl, &cfg);

    assert_eq!(baked.name, "walk-performance");
    assert_eq!(baked.frame_rate, 10.0);
    approx(baked.end_time, 10.0, 1e-6); // defaults to the timeline end
    assert_eq!(baked.frames.len(), 101);
    approx(baked.frames[0].time, 0.0, 1e-6);
    approx(baked.frames[100].time, 10.0, 1e-6);

    // The documented t=5 snapshot shows up at frame 50.
    let mid = &baked.frames[50];
    assert!(mid.staging);
    assert!(mid.acting.enabled);
    assert_eq!(mid.acting.anim, "walk");
    approx(mid.acting.position.x, 0.0, 1e-6);
}

/// it should agree with live queries at every baked stamp
#[test]
fn baking_matches_live_queries() {
    let tl = walk_timeline();
    let baked = bake_timeline(
        &tl,
        &BakingConfig {
            frame_rate: 24.0,
            start_time: 0.0,
            end_time: Some(10.0),
        },
    );
    for frame in &baked.frames {
        let live = tl.query_at_time(frame.time);
        assert_eq!(frame.staging, live.staging_state);
        assert_eq!(frame.acting, live.acting_state);
    }
}

/// it should clamp degenerate windows to a single frame
#[test]
fn baking_degenerate_window() {
    let tl = walk_timeline();
    let baked = bake_timeline(
        &tl,
        &BakingConfig {
            frame_rate: 60.0,
            start_time: 2.5,
            end_time: Some(2.5),
        },
    );
    assert_eq!(baked.frames.len(), 1);
    approx(baked.frames[0].time, 2.5, 1e-6);
    assert_eq!(baked.frames[0].acting.anim, "idle");
}

/// it should sanitize a non-positive frame rate to the 60 Hz default
#[test]
fn baking_sanitizes_frame_rate() {
    let tl = walk_timeline();
    let baked = bake_timeline(
        &tl,
        &BakingConfig {
            frame_rate: 0.0,
            start_time: 0.0,
            end_time: Some(1.0),
        },
    );
    assert_eq!(baked.frame_rate, 60.0);
    assert_eq!(baked.frames.len(), 61);
}

/// it should export a JSON object with the stable baked schema
#[test]
fn baked_json_export_shape() {
    let tl = walk_timeline();
    let baked = bake_timeline(&tl, &BakingConfig::default());
    let j = export_baked_json(&baked);
    assert!(j.is_object());
    assert_eq!(j["name"], "walk-performance");
    assert!(j["frames"].as_array().is_some_and(|f| !f.is_empty()));
}
