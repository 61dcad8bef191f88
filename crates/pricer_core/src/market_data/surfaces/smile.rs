//! Parametric volatility smile.
//!
//! σ(K, τ) = σ₀ · (1 + c · ln(K/S)²) · √(τ / T)
//!
//! The smile is symmetric in log-moneyness around the anchor spot S, and the
//! term structure scales with the square root of the expiry relative to the
//! anchor maturity T, so σ(S, T) = σ₀.

use num_traits::Float;

use super::traits::{check_query, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use crate::types::OptionParameters;

/// Default smile curvature c.
pub const DEFAULT_SMILE_CURVATURE: f64 = 0.2;

/// Quadratic-in-moneyness smile with square-root term structure.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{SmileVolSurface, VolatilitySurface};
///
/// let surface = SmileVolSurface::new(100.0_f64, 1.0, 0.2).unwrap();
///
/// // Wings are richer than the money
/// let atm = surface.volatility(100.0, 1.0).unwrap();
/// let wing = surface.volatility(70.0, 1.0).unwrap();
/// assert!(wing > atm);
///
/// // Longer expiries scale with sqrt(tau / T)
/// let long = surface.volatility(100.0, 4.0).unwrap();
/// assert!((long - 2.0 * atm).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmileVolSurface<T: Float> {
    spot: T,
    maturity: T,
    base_vol: T,
    curvature: T,
}

fn check_anchor<T: Float>(name: &'static str, value: T) -> Result<(), MarketDataError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(MarketDataError::InvalidAnchor {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

impl<T: Float> SmileVolSurface<T> {
    /// Builds a smile with the default curvature.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidAnchor` if spot, maturity or base volatility
    /// is not strictly positive and finite.
    pub fn new(spot: T, maturity: T, base_vol: T) -> Result<Self, MarketDataError> {
        let curvature = T::from(DEFAULT_SMILE_CURVATURE).unwrap_or_else(T::zero);
        Self::with_curvature(spot, maturity, base_vol, curvature)
    }

    /// Builds a smile with an explicit curvature (c >= 0).
    pub fn with_curvature(
        spot: T,
        maturity: T,
        base_vol: T,
        curvature: T,
    ) -> Result<Self, MarketDataError> {
        check_anchor("spot", spot)?;
        check_anchor("maturity", maturity)?;
        check_anchor("volatility", base_vol)?;
        if !curvature.is_finite() || curvature < T::zero() {
            return Err(MarketDataError::InvalidAnchor {
                name: "curvature",
                value: curvature.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            maturity,
            base_vol,
            curvature,
        })
    }

    /// Anchor spot S.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Anchor maturity T.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Base volatility σ₀.
    #[inline]
    pub fn base_vol(&self) -> T {
        self.base_vol
    }

    /// Smile curvature c.
    #[inline]
    pub fn curvature(&self) -> T {
        self.curvature
    }
}

impl SmileVolSurface<f64> {
    /// Smile anchored at the spot, maturity and volatility of a pricing request.
    pub fn from_parameters(params: &OptionParameters) -> Result<Self, MarketDataError> {
        Self::new(params.spot(), params.maturity(), params.volatility())
    }
}

impl<T: Float> VolatilitySurface<T> for SmileVolSurface<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;

        let moneyness = (strike / self.spot).ln();
        let smile = T::one() + self.curvature * moneyness * moneyness;
        let term = (expiry / self.maturity).sqrt();

        Ok(self.base_vol * smile * term)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atm_anchor_returns_base_vol() {
        let surface = SmileVolSurface::new(100.0_f64, 1.0, 0.2).unwrap();
        assert_relative_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_smile_formula() {
        let surface = SmileVolSurface::new(100.0_f64, 1.0, 0.2).unwrap();
        let m = (130.0_f64 / 100.0).ln();
        let expected = 0.2 * (1.0 + 0.2 * m * m) * (0.5_f64).sqrt();
        assert_relative_eq!(
            surface.volatility(130.0, 0.5).unwrap(),
            expected,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_symmetric_in_log_moneyness() {
        let surface = SmileVolSurface::new(100.0_f64, 1.0, 0.3).unwrap();
        let up = surface.volatility(125.0, 1.0).unwrap();
        let down = surface.volatility(80.0, 1.0).unwrap();
        assert_relative_eq!(up, down, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_curvature_is_flat_in_strike() {
        let surface = SmileVolSurface::with_curvature(100.0_f64, 1.0, 0.2, 0.0).unwrap();
        for strike in [50.0, 100.0, 200.0] {
            assert_relative_eq!(surface.volatility(strike, 1.0).unwrap(), 0.2, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_f32_surface() {
        let surface = SmileVolSurface::new(100.0_f32, 1.0, 0.2).unwrap();
        let vol = surface.volatility(100.0_f32, 1.0).unwrap();
        assert!((vol - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        assert!(SmileVolSurface::new(0.0_f64, 1.0, 0.2).is_err());
        assert!(SmileVolSurface::new(100.0_f64, -1.0, 0.2).is_err());
        assert!(SmileVolSurface::new(100.0_f64, 1.0, f64::NAN).is_err());
        assert!(SmileVolSurface::with_curvature(100.0_f64, 1.0, 0.2, -0.1).is_err());
    }

    #[test]
    fn test_invalid_query_rejected() {
        let surface = SmileVolSurface::new(100.0_f64, 1.0, 0.2).unwrap();
        assert!(matches!(
            surface.volatility(0.0, 1.0),
            Err(MarketDataError::InvalidStrike { .. })
        ));
        assert!(matches!(
            surface.volatility(100.0, 0.0),
            Err(MarketDataError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_from_parameters() {
        let params = OptionParameters::new(120.0, 100.0, 0.05, 0.25, 2.0, 1).unwrap();
        let surface = SmileVolSurface::from_parameters(&params).unwrap();
        assert_eq!(surface.spot(), 120.0);
        assert_eq!(surface.maturity(), 2.0);
        assert_eq!(surface.base_vol(), 0.25);
        assert_eq!(surface.curvature(), DEFAULT_SMILE_CURVATURE);
    }
}
