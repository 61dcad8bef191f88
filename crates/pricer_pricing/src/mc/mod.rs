//! Monte Carlo pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationConfig    (workers, execution strategy)
//! ├── EuropeanPayoff      (Z -> undiscounted payoff)
//! └── ParallelSimulator
//!     ├── EnginePool      (one entropy-seeded engine per worker)
//!     ├── rayon pool      (built per call, joined before return)
//!     └── SimulationAccumulator per worker, combined after the join
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_pricing::mc::{ExecutionStrategy, MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .workers(4)
//!     .strategy(ExecutionStrategy::Auto)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config);
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100_000).unwrap();
//! let put = pricer.estimate(&params, OptionType::Put).unwrap();
//! println!("Put: {:.4} +/- {:.4}", put.price, put.confidence_95());
//! ```

mod config;
mod error;
mod payoff;
mod pricer;
mod simulator;

pub use config::{
    default_workers, ExecutionStrategy, SimulationConfig, SimulationConfigBuilder, MAX_WORKERS,
};
pub use error::ConfigError;
pub use payoff::{EuropeanPayoff, SamplePayoff};
pub use pricer::{MonteCarloEstimate, MonteCarloPricer};
pub use simulator::{slice_len, ParallelSimulator, SimulationAccumulator};
