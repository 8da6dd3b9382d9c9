//! Benchmarks for the per-pointer-sample trackball path.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2, Vec3};
use trackball::trackball::{rotation_matrix, sphere, Trackball};

fn projection_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("sphere_project", |b| {
        b.iter(|| black_box(sphere::project(black_box(Vec2::new(0.2, -0.1)))))
    });
}

fn matrix_benchmark(c: &mut Criterion) {
    let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.7);
    let _ = c.bench_function("rotation_matrix", |b| {
        b.iter(|| black_box(rotation_matrix(black_box(q))))
    });
}

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_update");

    for samples in [1_u16, 16, 256] {
        let _ = group.bench_function(format!("{samples}_samples"), |b| {
            let Ok(mut ball) = Trackball::new(800, 600) else {
                return;
            };
            b.iter(|| {
                ball.begin_drag(400.0, 300.0);
                for i in 0..samples {
                    let t = f32::from(i);
                    let _ = black_box(
                        ball.update_drag(400.0 + t, 300.0 - 0.5 * t),
                    );
                }
                black_box(ball.end_drag(410.0, 290.0))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    projection_benchmark,
    matrix_benchmark,
    drag_benchmark
);
criterion_main!(benches);
