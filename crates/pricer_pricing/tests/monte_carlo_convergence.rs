//! Monte Carlo convergence tests against the closed-form price.
//!
//! Every simulation here is entropy-seeded, so tolerances are expressed in
//! standard errors and sized so that a spurious failure is vanishingly rare.
//!
//! # Test Categories
//!
//! 1. **Convergence**: large-N price within a fixed band of Black-Scholes
//! 2. **Worker invariance**: 1, 4 and 16 workers estimate the same price
//! 3. **Strategy agreement**: scalar and vectorised paths agree

use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::{ExecutionStrategy, MonteCarloEstimate, MonteCarloPricer, SimulationConfig};

/// Analytic call for S=100, K=100, r=0.05, v=0.2, T=1.
const REFERENCE_CALL: f64 = 10.4506;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn params(samples: u64) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, samples).unwrap()
}

fn estimate(
    workers: usize,
    strategy: ExecutionStrategy,
    params: &OptionParameters,
    option_type: OptionType,
) -> MonteCarloEstimate {
    let config = SimulationConfig::builder()
        .workers(workers)
        .strategy(strategy)
        .build()
        .unwrap();
    MonteCarloPricer::new(config)
        .estimate(params, option_type)
        .unwrap()
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_call_converges_to_black_scholes() {
    init_tracing();
    let p = params(2_000_000);
    let result = estimate(4, ExecutionStrategy::Auto, &p, OptionType::Call);

    assert_eq!(result.samples, 2_000_000);
    assert!(
        (result.price - REFERENCE_CALL).abs() < 0.05,
        "MC call {} vs analytic {}",
        result.price,
        REFERENCE_CALL
    );
    // sigma(payoff) is about 14.7 here
    assert!(result.std_error < 0.015, "std error {}", result.std_error);
}

#[test]
fn test_put_converges_to_black_scholes() {
    let p = params(1_000_000);
    let analytic = BlackScholes::price(&p, OptionType::Put).unwrap();
    let result = estimate(4, ExecutionStrategy::Scalar, &p, OptionType::Put);
    assert!((result.price - analytic).abs() < 6.0 * result.std_error);
}

#[test]
fn test_error_shrinks_with_samples() {
    let small = estimate(2, ExecutionStrategy::Scalar, &params(10_000), OptionType::Call);
    let large = estimate(2, ExecutionStrategy::Scalar, &params(1_000_000), OptionType::Call);
    // 100x the samples gives roughly a tenth of the error
    let ratio = small.std_error / large.std_error;
    assert!((7.0..14.0).contains(&ratio), "ratio {ratio}");
}

// ============================================================================
// Worker-count invariance
// ============================================================================

#[test]
fn test_price_independent_of_worker_count() {
    init_tracing();
    let p = params(400_003);
    let analytic = BlackScholes::price(&p, OptionType::Call).unwrap();

    for workers in [1, 4, 16] {
        let result = estimate(workers, ExecutionStrategy::Scalar, &p, OptionType::Call);
        assert_eq!(result.samples, 400_003);
        assert!(
            (result.price - analytic).abs() < 6.0 * result.std_error,
            "{workers} workers: MC {} vs analytic {analytic}",
            result.price
        );
    }
}

#[test]
fn test_more_workers_than_samples() {
    let p = params(5);
    let result = estimate(16, ExecutionStrategy::Vectorized, &p, OptionType::Put);
    assert_eq!(result.samples, 5);
    assert!(result.price.is_finite());
    assert!(result.price >= 0.0);
}

// ============================================================================
// Strategy agreement
// ============================================================================

#[test]
fn test_vectorised_matches_scalar() {
    let p = params(800_002);
    for ty in OptionType::ALL {
        let scalar = estimate(4, ExecutionStrategy::Scalar, &p, ty);
        let vector = estimate(4, ExecutionStrategy::Vectorized, &p, ty);
        let combined = (scalar.std_error.powi(2) + vector.std_error.powi(2)).sqrt();
        assert!(
            (scalar.price - vector.price).abs() < 6.0 * combined,
            "{ty}: scalar {} vs vectorised {}",
            scalar.price,
            vector.price
        );
        assert!((scalar.std_error / vector.std_error - 1.0).abs() < 0.05);
    }
}
