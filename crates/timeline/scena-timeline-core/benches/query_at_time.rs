use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scena_timeline_core::{ActingDirective, StagingDirective, Timeline, TimelineData, Vec3};

fn walk_timeline() -> Timeline {
    let data = TimelineData {
        name: "walk-performance".into(),
        staging: vec![
            StagingDirective::new(0.0, 1.0, false),
            StagingDirective::new(1.0, 4.0, true),
            StagingDirective::new(4.0, 6.0, true),
            StagingDirective::new(6.0, 9.0, true),
            StagingDirective::new(9.0, 10.0, false),
        ],
        acting: vec![
            ActingDirective::new(0.0, 2.0, false, Vec3::ZERO, Vec3::ZERO, ""),
            ActingDirective::new(
                2.0,
                3.0,
                true,
                Vec3::new(-5.0, 0.0, 0.0),
                Vec3::new(-5.0, 0.0, 0.0),
                "idle",
            ),
            ActingDirective::new(
                3.0,
                7.0,
                true,
                Vec3::new(-5.0, 0.0, 0.0),
                Vec3::new(5.0, 0.0, 0.0),
                "walk",
            ),
            ActingDirective::new(
                7.0,
                8.0,
                true,
                Vec3::new(5.0, 0.0, 0.0),
                Vec3::new(5.0, 0.0, 0.0),
                "idle",
            ),
            ActingDirective::new(8.0, 10.0, false, Vec3::ZERO, Vec3::ZERO, ""),
        ],
    };
    Timeline::new(data).expect("bench data is well-formed")
}

fn bench_query_at_time(c: &mut Criterion) {
    let tl = walk_timeline();
    c.bench_function("query_at_time/walk", |b| {
        b.iter(|| {
            for t in [0.0_f32, 2.5, 5.0, 6.0, 9.5, 42.0] {
                black_box(tl.query_at_time(black_box(t)));
            }
        })
    });
}

criterion_group!(benches, bench_query_at_time);
criterion_main!(benches);
