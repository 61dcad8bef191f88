//! # Pricer Pricing (L3: Simulation and Risk)
//!
//! Monte Carlo pricing and Greeks for European options under Black-Scholes
//! dynamics, plus the facade consumed by presentation layers.
//!
//! ## Components
//!
//! - [`rng`]: Entropy-seeded random engines, one per worker
//! - [`mc`]: Parallel reduction simulator and Monte Carlo pricer
//! - [`greeks`]: Finite-difference (bump-and-reprice) Greeks
//! - [`facade`]: [`OptionPricingEngine`], the public entry point
//! - [`settings`]: TOML / environment configuration
//!
//! ## Layer Integration
//!
//! - Layer 1 (`pricer_core`): `OptionParameters`, `PricingError`,
//!   the `OptionPricer` trait, volatility surfaces
//! - Layer 2 (`pricer_models`): closed-form prices and Greeks
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_pricing::greeks::GreeksMode;
//! use pricer_pricing::OptionPricingEngine;
//!
//! let engine = OptionPricingEngine::default();
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100_000).unwrap();
//!
//! let mc = engine.price_option(&params, OptionType::Call).unwrap();
//! let bs = engine.analytic_price(&params, OptionType::Call).unwrap();
//! assert!((mc - bs).abs() < 0.5);
//!
//! let vega = engine.vega(&params, OptionType::Call, GreeksMode::Analytic).unwrap();
//! assert!(vega > 0.0);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per simulation run, `warn` when
//! a worker count is capped, `trace` per worker slice) and never installs a
//! subscriber.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod facade;
pub mod greeks;
pub mod mc;
pub mod rng;
pub mod settings;

// Re-export commonly used items for convenience
pub use facade::OptionPricingEngine;
pub use greeks::{FiniteDifferenceConfig, FiniteDifferenceEstimator, GreeksMode, RepricingSource};
pub use mc::{ExecutionStrategy, MonteCarloEstimate, MonteCarloPricer, SimulationConfig};
pub use settings::{PricerSettings, SettingsError};
