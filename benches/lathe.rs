use std::f32::consts::TAU;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use lathe_sketch::export::write_glb;
use lathe_sketch::lathe::build;
use lathe_sketch::types::Curve;

/// Closed circular profile of `n` points offset from the axis.
fn make_profile(n: usize) -> Curve {
    let points = (0..n)
        .map(|k| {
            let t = k as f32 / n as f32 * TAU;
            Vec3::new(2.0 + t.cos(), 2.5 + t.sin(), 0.0)
        })
        .collect();
    let mut curve = Curve::new();
    curve.replace(points);
    curve
}

fn bench_build(c: &mut Criterion) {
    let profile = make_profile(128);
    let axis = Curve::from_xy(&[[0.0, 0.0], [0.0, 5.0]]);

    c.bench_function("lathe_build_128x64", |b| {
        b.iter(|| build(&profile, &axis, 64));
    });

    c.bench_function("lathe_build_128x256", |b| {
        b.iter(|| build(&profile, &axis, 256));
    });
}

fn bench_export(c: &mut Criterion) {
    let profile = make_profile(128);
    let axis = Curve::from_xy(&[[0.0, 0.0], [0.0, 5.0]]);
    let mesh = build(&profile, &axis, 256).unwrap();

    c.bench_function("write_glb_128x256", |b| {
        b.iter(|| write_glb(&mesh, &[&profile, &axis]));
    });
}

criterion_group!(benches, bench_build, bench_export);
criterion_main!(benches);
