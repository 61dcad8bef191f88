//! Greeks by bump-and-reprice.
//!
//! The closed-form Greeks live in `pricer_models::analytical`. This module
//! provides the finite-difference alternative, which works with any
//! [`OptionPricer`](pricer_core::traits::OptionPricer) and is the only way
//! to obtain Greeks from the Monte Carlo pricer.
//!
//! - [`FiniteDifferenceConfig`]: per-Greek step sizes
//! - [`FiniteDifferenceEstimator`]: delta, gamma, theta, vega
//! - [`GreeksMode`]: analytic vs finite-difference dispatch used by the facade

mod config;
mod finite_difference;

pub use config::{
    FiniteDifferenceConfig, FiniteDifferenceConfigBuilder, GammaMethod, GreeksMode,
    RepricingSource, DEFAULT_DELTA_BUMP, DEFAULT_GAMMA_DELTA_BUMP, DEFAULT_GAMMA_PRICE_BUMP,
    DEFAULT_MONTE_CARLO_THETA_STEP, DEFAULT_THETA_STEP, DEFAULT_VEGA_STEP,
};
pub use finite_difference::FiniteDifferenceEstimator;
