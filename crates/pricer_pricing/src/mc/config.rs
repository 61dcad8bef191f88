//! Monte Carlo simulation configuration.
//!
//! This module provides the worker-count and execution-strategy settings
//! for [`ParallelSimulator`](super::ParallelSimulator) runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Upper bound on simulation workers; larger requests are capped.
pub const MAX_WORKERS: usize = 256;

/// Inner-loop strategy for evaluating payoffs inside each worker.
///
/// - `Auto`: vectorised where the target has wide registers, scalar otherwise
/// - `Scalar`: one draw at a time
/// - `Vectorized`: four draws per batch via `wide::f64x4`
///
/// Every strategy computes the same estimator; the choice only affects speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    /// Pick per platform.
    #[default]
    Auto,
    /// Scalar loop.
    Scalar,
    /// Four-lane batches.
    Vectorized,
}

impl ExecutionStrategy {
    /// Resolves `Auto` to a concrete strategy for the compilation target.
    #[inline]
    pub fn resolve(self) -> ExecutionStrategy {
        match self {
            ExecutionStrategy::Auto => {
                if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
                    ExecutionStrategy::Vectorized
                } else {
                    ExecutionStrategy::Scalar
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecutionStrategy::Auto => "auto",
            ExecutionStrategy::Scalar => "scalar",
            ExecutionStrategy::Vectorized => "vectorized",
        })
    }
}

impl FromStr for ExecutionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ExecutionStrategy::Auto),
            "scalar" => Ok(ExecutionStrategy::Scalar),
            "vectorized" | "vectorised" | "simd" => Ok(ExecutionStrategy::Vectorized),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Simulation configuration.
///
/// Immutable; use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ExecutionStrategy, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .workers(4)
///     .strategy(ExecutionStrategy::Scalar)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.workers(), 4);
/// assert_eq!(config.strategy(), ExecutionStrategy::Scalar);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of worker threads per simulation call.
    workers: usize,
    /// Inner-loop strategy.
    strategy: ExecutionStrategy,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of workers.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the configured strategy (possibly `Auto`).
    #[inline]
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Returns a copy with a different worker count, capped at [`MAX_WORKERS`].
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWorkerCount` for zero.
    pub fn with_workers(&self, workers: usize) -> Result<Self, ConfigError> {
        Self::builder()
            .workers(workers)
            .strategy(self.strategy)
            .build()
    }
}

impl Default for SimulationConfig {
    /// Hardware concurrency, `Auto` strategy.
    fn default() -> Self {
        Self {
            workers: default_workers(),
            strategy: ExecutionStrategy::Auto,
        }
    }
}

/// Hardware concurrency, capped at [`MAX_WORKERS`].
#[inline]
pub fn default_workers() -> usize {
    num_cpus::get().clamp(1, MAX_WORKERS)
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    workers: Option<usize>,
    strategy: ExecutionStrategy,
}

impl SimulationConfigBuilder {
    /// Sets the number of worker threads.
    ///
    /// Defaults to hardware concurrency when not set.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the inner-loop strategy.
    #[inline]
    pub fn strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the configuration.
    ///
    /// Worker counts above [`MAX_WORKERS`] are capped with a warning rather
    /// than rejected.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWorkerCount` when the worker count is zero.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let requested = self.workers.unwrap_or_else(default_workers);
        if requested == 0 {
            return Err(ConfigError::InvalidWorkerCount(requested));
        }

        let workers = if requested > MAX_WORKERS {
            tracing::warn!(
                requested,
                cap = MAX_WORKERS,
                "worker count exceeds limit; capping"
            );
            MAX_WORKERS
        } else {
            requested
        };

        Ok(SimulationConfig {
            workers,
            strategy: self.strategy,
        })
    }
}
