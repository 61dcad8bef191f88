//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes dynamics:
//! - Price for calls and puts
//! - Analytical Greeks (Delta, Gamma, Theta, Vega)
//!
//! ## Units
//!
//! - Theta is quoted per calendar day (annual theta / 365)
//! - Vega is quoted per volatility point (∂V/∂σ / 100)

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{AnalyticFactors, AnalyticPricer, BlackScholes, DAYS_PER_YEAR, VEGA_SCALE};
pub use distributions::{norm_cdf, norm_pdf};
