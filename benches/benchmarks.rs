//! Benchmarks for incstats accumulators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use incstats::extremum::Extrema;
use incstats::statistics::kernel;
use incstats::statistics::{
    CentralMoments, WeightedKurtosis, WeightedMean, WeightedSkewness, WeightedVariance,
};
use incstats::traits::Accumulator;

/// Deterministic sample stream so runs are comparable
fn sample(i: u64) -> (f64, f64) {
    let x = (i.wrapping_mul(0x9e3779b97f4a7c15) >> 11) as f64 / (1u64 << 53) as f64;
    let w = 0.5 + (i % 7) as f64 / 7.0;
    (x, w)
}

// ============================================================================
// Specialized accumulators
// ============================================================================

fn bench_specialized(c: &mut Criterion) {
    let mut group = c.benchmark_group("specialized");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mean_update", |b| {
        let mut stats = WeightedMean::new();
        let mut i = 0u64;
        b.iter(|| {
            let (x, w) = sample(i);
            stats.update(black_box(x), black_box(w));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("variance_update", |b| {
        let mut stats = WeightedVariance::new();
        let mut i = 0u64;
        b.iter(|| {
            let (x, w) = sample(i);
            stats.update(black_box(x), black_box(w));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("skewness_update", |b| {
        let mut stats = WeightedSkewness::new();
        let mut i = 0u64;
        b.iter(|| {
            let (x, w) = sample(i);
            stats.update(black_box(x), black_box(w));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("kurtosis_update", |b| {
        let mut stats = WeightedKurtosis::new();
        let mut i = 0u64;
        b.iter(|| {
            let (x, w) = sample(i);
            stats.update(black_box(x), black_box(w));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("kurtosis_summary", |b| {
        let mut stats = WeightedKurtosis::new();
        for i in 0..100_000u64 {
            let (x, w) = sample(i);
            stats.update(x, w);
        }
        b.iter(|| black_box(stats.summary()));
    });

    group.finish();
}

// ============================================================================
// Generalized central moments
// ============================================================================

fn bench_central_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("central_moments");
    group.throughput(Throughput::Elements(1));

    for order in [4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("update", order), &order, |b, &order| {
            let mut buffer = vec![0.0; order + 1];
            let mut i = 0u64;
            b.iter(|| {
                let (x, w) = sample(i);
                kernel::update_central_moment(black_box(x), black_box(w), &mut buffer, order)
                    .unwrap();
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("finalize_into_order_16", |b| {
        let mut moments = CentralMoments::new(16).unwrap();
        for i in 0..100_000u64 {
            let (x, w) = sample(i);
            moments.update(x, w);
        }
        let mut results = [0.0; 18];
        b.iter(|| {
            moments.finalize_into(&mut results, true).unwrap();
            black_box(&results);
        });
    });

    group.finish();
}

// ============================================================================
// Extremum trackers
// ============================================================================

fn bench_extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrema");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut extrema = Extrema::new();
        let mut i = 0u64;
        b.iter(|| {
            extrema.add(black_box(sample(i).0));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_specialized, bench_central_moments, bench_extrema);

criterion_main!(benches);
