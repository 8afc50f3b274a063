// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gimbal_math::{Quat, Vec3};

fn sample_rotations(n: usize) -> Vec<Quat> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let f = i as f32;
            Quat::euler(f * 7.0 % 170.0, f * 3.0 % 80.0, f * 11.0 % 170.0)
        })
        .collect()
}

fn bench_slerp(c: &mut Criterion) {
    let a = Quat::euler(10.0, 20.0, 30.0);
    let b = Quat::euler(-40.0, 60.0, 120.0);
    let mut group = c.benchmark_group("quat_slerp");
    group.bench_function("general", |bench| {
        bench.iter(|| black_box(a).slerp(&black_box(b), black_box(0.37)));
    });
    // Near-parallel endpoints take the normalized-lerp path.
    let near = Quat::from_axis_angle(Vec3::UP, 1e-4).multiply(&a);
    group.bench_function("near_parallel", |bench| {
        bench.iter(|| black_box(a).slerp(&black_box(near), black_box(0.37)));
    });
    group.finish();
}

fn bench_euler_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_euler_round_trip");
    for &n in &[1usize, 64, 1_024] {
        let rotations = sample_rotations(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &rotations, |bench, rots| {
            bench.iter(|| {
                for q in rots {
                    let e = q.euler_angles();
                    black_box(Quat::euler(e.x(), e.y(), e.z()));
                }
            });
        });
    }
    group.finish();
}

fn bench_rotate_vec3(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_rotate_vec3");
    let q = Quat::euler(15.0, -25.0, 70.0);
    let v = Vec3::new(1.0, 2.0, 3.0);
    group.bench_function("closed_form", |bench| {
        bench.iter(|| black_box(q) * black_box(v));
    });
    let m = q.to_mat4();
    group.bench_function("via_mat4", |bench| {
        bench.iter(|| black_box(m).transform_direction(&black_box(v)));
    });
    group.finish();
}

criterion_group!(benches, bench_slerp, bench_euler_round_trip, bench_rotate_vec3);
criterion_main!(benches);
