use scena_timeline_core::{parse_stored_timeline_json, Timeline};

fn main() -> anyhow::Result<()> {
    let json = scena_test_fixtures::timelines::json("walk-performance")?;
    let data = parse_stored_timeline_json(&json)?;
    let timeline = Timeline::new(data)?;

    // Scrub the playhead the way a transport slider would.
    let mut t = 0.0_f32;
    while t <= 10.0 {
        let r = timeline.query_at_time(t);
        println!(
            "t={t:>4.1}  staging={:<5}  acting={:<5} anim={:<5} pos=({:.2}, {:.2}, {:.2})  upcoming: {} staging / {} acting",
            r.staging_state,
            r.acting_state.enabled,
            r.acting_state.anim,
            r.acting_state.position.x,
            r.acting_state.position.y,
            r.acting_state.position.z,
            r.staging_sequence.len(),
            r.acting_sequence.len(),
        );
        t += 0.5;
    }

    Ok(())
}
