//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation, pricing and simulation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: An input is outside its valid domain, or drives the
///   closed-form factors into a degenerate state
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `WorkerPool`: Simulation worker threads could not be started
/// - `InvalidConfig`: Engine configuration rejected
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("spot", 0.0, "must be positive");
/// assert_eq!(format!("{}", err), "Invalid parameter 'spot' = 0: must be positive");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Invalid input parameter.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Worker threads could not be created for a simulation run.
    #[error("Worker pool failure: {0}")]
    WorkerPool(String),

    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Returns true for validation failures.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
