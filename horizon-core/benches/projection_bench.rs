//! Criterion benchmarks for projection hot paths.
//!
//! Benchmarks:
//! 1. Full projection pipeline (resolution through aggregation)
//! 2. Path simulation alone, scaling in paths and in assets
//! 3. Percentile aggregation of a large ensemble

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use horizon_core::data::Month;
use horizon_core::engine::{aggregate, resolve, simulate_paths};
use horizon_core::stats::{estimate, factorize, ReturnModel};
use horizon_core::{
    run_projection, ContributionPlan, Frequency, Holding, MemoryProvider, PricePoint,
    ProjectionConfig,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn series(months: usize, base: f64, phase: f64) -> Vec<PricePoint> {
    (0..months)
        .map(|i| {
            let m = Month::new(2005, 1).plus(i);
            let close = base * 1.004_f64.powi(i as i32) * (1.0 + 0.03 * (i as f64 + phase).sin());
            PricePoint::new(
                NaiveDate::from_ymd_opt(m.year, m.month, 10).unwrap(),
                close,
            )
        })
        .collect()
}

fn provider(n_assets: usize) -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    for a in 0..n_assets {
        provider.insert(format!("SYM{a}"), series(240, 50.0 + a as f64 * 10.0, a as f64));
    }
    provider
}

fn holdings(n_assets: usize) -> Vec<Holding> {
    (0..n_assets)
        .map(|a| Holding::new(format!("SYM{a}"), 10.0, 50.0 + a as f64 * 10.0))
        .collect()
}

fn calibrated_model(n_assets: usize) -> ReturnModel {
    // Synthetic but well-conditioned: distinct phases keep correlations
    // away from ±1.
    let rows: Vec<Vec<f64>> = (1..240)
        .map(|t| {
            (0..n_assets)
                .map(|a| 0.004 + 0.02 * ((t as f64 + a as f64).sin() - ((t - 1) as f64 + a as f64).sin()))
                .collect()
        })
        .collect();
    estimate(&rows)
}

// ── 1. Full Pipeline ─────────────────────────────────────────────────

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for &n_sims in &[100, 1_000, 5_000] {
        let provider = provider(4);
        let holdings = holdings(4);
        let plans = vec![ContributionPlan::new("SYM0", 100.0, Frequency::Monthly)];
        let config = ProjectionConfig::new(10, n_sims).with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("4_assets_10y", n_sims),
            &n_sims,
            |b, _| {
                b.iter(|| {
                    run_projection(
                        black_box(&provider),
                        black_box(&holdings),
                        black_box(&plans),
                        black_box(&config),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

// ── 2. Path Simulation ───────────────────────────────────────────────

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_simulation");

    // Scaling in paths
    for &n_sims in &[500, 2_000, 10_000] {
        let resolved = resolve(&holdings(3), &[]).unwrap();
        let model = calibrated_model(3);
        let factor = factorize(&model.cov).unwrap();
        let config = ProjectionConfig::new(10, n_sims).with_seed(7);

        group.bench_with_input(BenchmarkId::new("3_assets", n_sims), &n_sims, |b, _| {
            b.iter(|| {
                simulate_paths(
                    black_box(&resolved),
                    black_box(&model),
                    black_box(&factor),
                    black_box(&config),
                )
            });
        });
    }

    // Scaling in assets
    for &n_assets in &[2, 8, 16] {
        let resolved = resolve(&holdings(n_assets), &[]).unwrap();
        let model = calibrated_model(n_assets);
        let factor = factorize(&model.cov).unwrap();
        let config = ProjectionConfig::new(10, 1_000).with_seed(7);

        group.bench_with_input(
            BenchmarkId::new("1000_paths", n_assets),
            &n_assets,
            |b, _| {
                b.iter(|| {
                    simulate_paths(
                        black_box(&resolved),
                        black_box(&model),
                        black_box(&factor),
                        black_box(&config),
                    )
                });
            },
        );
    }

    group.finish();
}

// ── 3. Aggregation ───────────────────────────────────────────────────

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let resolved = resolve(&holdings(3), &[]).unwrap();
    let model = calibrated_model(3);
    let factor = factorize(&model.cov).unwrap();
    let config = ProjectionConfig::new(20, 5_000).with_seed(11);
    let ensemble = simulate_paths(&resolved, &model, &factor, &config);

    group.bench_function("5000_paths_20y", |b| {
        b.iter(|| {
            aggregate(
                black_box(&ensemble),
                black_box(&resolved),
                black_box(&config),
                Month::new(2026, 8),
                240,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_simulation,
    bench_aggregation,
);
criterion_main!(benches);
