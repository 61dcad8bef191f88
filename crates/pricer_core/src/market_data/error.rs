//! Market data error types.
//!
//! This module provides structured error handling for volatility surface
//! construction and lookups.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `InvalidAnchor`: Non-positive or non-finite surface anchor value
/// - `InvalidRange`: Empty or inverted sampling range
/// - `InsufficientData`: Not enough grid points for construction
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidExpiry { expiry: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid anchor value for a parametric surface.
    #[error("Invalid surface anchor '{name}' = {value}")]
    InvalidAnchor {
        /// Anchor name (spot, maturity, volatility)
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// Sampling range is empty, inverted or non-positive.
    #[error("Invalid range: [{min}, {max}]")]
    InvalidRange {
        /// Lower end
        min: f64,
        /// Upper end
        max: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidStrike { strike } => {
                PricingError::invalid_parameter("strike", strike, err.to_string())
            }
            MarketDataError::InvalidExpiry { expiry } => {
                PricingError::invalid_parameter("maturity", expiry, err.to_string())
            }
            MarketDataError::InvalidAnchor { name, value } => {
                PricingError::invalid_parameter(name, value, err.to_string())
            }
            MarketDataError::InvalidRange { .. } | MarketDataError::InsufficientData { .. } => {
                PricingError::InvalidConfig(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = MarketDataError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_range_display() {
        let err = MarketDataError::InvalidRange { min: 5.0, max: 3.0 };
        assert_eq!(format!("{}", err), "Invalid range: [5, 3]");
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MarketDataError::InsufficientData { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
    }

    #[test]
    fn test_into_pricing_error() {
        let pricing_err: PricingError = MarketDataError::InvalidExpiry { expiry: 0.0 }.into();
        assert!(matches!(
            pricing_err,
            PricingError::InvalidParameter {
                name: "maturity",
                ..
            }
        ));

        let pricing_err: PricingError = MarketDataError::InsufficientData { got: 1, need: 2 }.into();
        assert!(matches!(pricing_err, PricingError::InvalidConfig(_)));
    }
}
