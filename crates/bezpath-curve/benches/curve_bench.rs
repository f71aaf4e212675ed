use bezpath_curve::{build, point_at_fraction, polyline_length};
use bezpath_math::{dvec3, Point3};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn zigzag(count: usize) -> Vec<Point3> {
    (0..count)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { 80.0 };
            dvec3(i as f64 * 50.0, y, 0.0)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[8usize, 64, 512] {
        let controls = zigzag(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &controls,
            |b, controls| b.iter(|| build(black_box(controls), black_box(0.01)).map(|p| p.len())),
        );
    }
    group.finish();
}

fn bench_point_at_fraction(c: &mut Criterion) {
    let polyline = build(&zigzag(512), 0.01).expect("build failed");
    let length = polyline_length(&polyline);

    c.bench_function("point_at_fraction_512", |b| {
        b.iter(|| point_at_fraction(black_box(&polyline), length, black_box(0.73)))
    });
}

criterion_group!(benches, bench_build, bench_point_at_fraction);
criterion_main!(benches);
