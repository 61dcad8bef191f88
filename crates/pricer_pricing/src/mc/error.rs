//! Error types for simulation configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid settings are provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Worker count of zero.
    #[error("Invalid worker count {0}: at least one worker is required")]
    InvalidWorkerCount(usize),

    /// Unrecognised execution strategy name.
    #[error("Unknown execution strategy '{0}': expected auto, scalar or vectorized")]
    UnknownStrategy(String),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}
