//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - RNG throughput (single draws vs batch fill)
//! - Monte Carlo pricing across sample counts, scalar vs vectorised
//! - Worker scaling at a fixed sample count
//! - Greeks: closed-form vs finite-difference on both pricers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::greeks::{GreeksMode, RepricingSource};
use pricer_pricing::mc::{ExecutionStrategy, MonteCarloPricer, SimulationConfig};
use pricer_pricing::rng::PricerRng;
use pricer_pricing::OptionPricingEngine;

fn params(samples: u64) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, samples).unwrap()
}

fn pricer(workers: usize, strategy: ExecutionStrategy) -> MonteCarloPricer {
    MonteCarloPricer::new(
        SimulationConfig::builder()
            .workers(workers)
            .strategy(strategy)
            .build()
            .unwrap(),
    )
}

/// Benchmark RNG generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark Monte Carlo pricing across sample counts and strategies.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(20);

    for samples in [10_000_u64, 100_000, 1_000_000] {
        for strategy in [ExecutionStrategy::Scalar, ExecutionStrategy::Vectorized] {
            let pricer = pricer(4, strategy);
            let p = params(samples);
            group.bench_with_input(
                BenchmarkId::new(format!("european_call_{strategy}"), samples),
                &p,
                |b, p| b.iter(|| black_box(pricer.estimate(p, OptionType::Call).unwrap())),
            );
        }
    }

    group.finish();
}

/// Benchmark worker scaling at a fixed sample count.
fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_scaling");
    group.sample_size(20);

    let p = params(1_000_000);
    for workers in [1, 2, 4, 8, 16] {
        let pricer = pricer(workers, ExecutionStrategy::Auto);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &p, |b, p| {
            b.iter(|| black_box(pricer.estimate(p, OptionType::Put).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark Greeks: closed-form vs bump-and-reprice.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    group.sample_size(20);

    let p = params(100_000);
    let engine = OptionPricingEngine::new(
        SimulationConfig::builder().workers(4).build().unwrap(),
        Default::default(),
    );

    group.bench_function("analytic_all", |b| {
        b.iter(|| black_box(BlackScholes::greeks(&p, OptionType::Call).unwrap()))
    });
    group.bench_function("fd_analytic_gamma", |b| {
        b.iter(|| {
            black_box(
                engine
                    .gamma(
                        &p,
                        OptionType::Call,
                        GreeksMode::FiniteDifference(RepricingSource::Analytic),
                    )
                    .unwrap(),
            )
        })
    });
    group.bench_function("fd_monte_carlo_delta", |b| {
        b.iter(|| {
            black_box(
                engine
                    .delta(
                        &p,
                        OptionType::Call,
                        GreeksMode::FiniteDifference(RepricingSource::MonteCarlo),
                    )
                    .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_mc_pricing,
    bench_worker_scaling,
    bench_greeks
);
criterion_main!(benches);
