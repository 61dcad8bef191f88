//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic volatility surface trait for implied volatility lookup.
///
/// Implementations are generic over `T: Float` so the same surface can be
/// queried with `f32` for display grids and `f64` for pricing.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns the implied volatility σ(K, T)
/// - `strike_domain()` / `expiry_domain()` return the valid query ranges
///
/// # Invariants
///
/// - σ > 0 for all valid (strike, expiry) pairs
pub trait VolatilitySurface<T: Float> {
    /// Return the implied volatility for given strike and expiry.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidStrike` - If strike <= 0
    /// * `MarketDataError::InvalidExpiry` - If expiry <= 0
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Return the valid strike domain (K_min, K_max).
    fn strike_domain(&self) -> (T, T);

    /// Return the valid expiry domain (T_min, T_max).
    fn expiry_domain(&self) -> (T, T);
}

/// Shared argument check for surfaces defined on the positive quadrant.
pub(crate) fn check_query<T: Float>(strike: T, expiry: T) -> Result<(), MarketDataError> {
    if !(strike > T::zero()) {
        return Err(MarketDataError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !(expiry > T::zero()) {
        return Err(MarketDataError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
