//! Benchmarks for STL and MSTL decomposition.

use anofox_stl::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_seasonal(n: usize, period: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let t = i as f64;
            0.05 * t
                + 10.0 * (2.0 * std::f64::consts::PI * t / period as f64).sin()
                + rng.gen_range(-1.0..1.0)
        })
        .collect()
}

fn generate_multi_seasonal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            50.0 + 0.02 * t
                + 5.0 * (2.0 * std::f64::consts::PI * t / 24.0).sin()
                + 3.0 * (2.0 * std::f64::consts::PI * t / 168.0).sin()
        })
        .collect()
}

fn bench_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("stl");

    for size in [120, 480, 1920, 7680].iter() {
        let signal = generate_seasonal(*size, 12);

        group.bench_with_input(BenchmarkId::new("default", size), size, |b, _| {
            let params = STLParams::default();
            b.iter(|| params.fit(black_box(&signal), 12))
        });

        group.bench_with_input(BenchmarkId::new("robust", size), size, |b, _| {
            let params = STLParams::robust();
            b.iter(|| params.fit(black_box(&signal), 12))
        });

        group.bench_with_input(BenchmarkId::new("periodic", size), size, |b, _| {
            let params = STLParams {
                seasonal_length: Some(size + 1),
                ..STLParams::default()
            };
            b.iter(|| params.fit(black_box(&signal), 12))
        });
    }

    group.finish();
}

fn bench_stl_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("stl_precision");
    let signal = generate_seasonal(1920, 12);
    let signal_f32: Vec<f32> = signal.iter().map(|&v| v as f32).collect();
    let params = STLParams::default();

    group.bench_function("f64", |b| b.iter(|| params.fit(black_box(&signal), 12)));
    group.bench_function("f32", |b| {
        b.iter(|| params.fit(black_box(&signal_f32), 12))
    });

    group.finish();
}

fn bench_mstl(c: &mut Criterion) {
    let mut group = c.benchmark_group("mstl");

    for size in [672, 2016, 8064].iter() {
        let signal = generate_multi_seasonal(*size);

        group.bench_with_input(BenchmarkId::new("two_periods", size), size, |b, _| {
            let params = MSTLParams::default();
            b.iter(|| params.fit(black_box(&signal), &[24, 168]))
        });

        group.bench_with_input(BenchmarkId::new("boxcox", size), size, |b, _| {
            let params = MSTLParams {
                lambda: Some(0.5),
                ..MSTLParams::default()
            };
            b.iter(|| params.fit(black_box(&signal), &[24, 168]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stl, bench_stl_precision, bench_mstl);
criterion_main!(benches);
