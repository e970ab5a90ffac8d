//! Benchmarks for the three outlier detectors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hscluster_analysis::outliers::{jump_outliers, mad_based_outlier, outliers};

/// Deterministic skewed sample with a handful of large values.
fn sample(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let base = ((i * 7919) % 1000) as f64 / 10.0;
            if i % 97 == 0 {
                base * 50.0
            } else {
                base
            }
        })
        .collect()
}

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("outliers");
    for n in [100usize, 1_000, 10_000] {
        let values = sample(n);
        group.bench_with_input(BenchmarkId::new("jump", n), &values, |b, v| {
            b.iter(|| jump_outliers(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("quartile", n), &values, |b, v| {
            b.iter(|| outliers(black_box(v), 2.0))
        });
        group.bench_with_input(BenchmarkId::new("mad", n), &values, |b, v| {
            b.iter(|| mad_based_outlier(black_box(v), 2.5))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detectors);
criterion_main!(benches);
