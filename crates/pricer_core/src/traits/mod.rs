//! Core pricing trait.
//!
//! [`OptionPricer`] is the seam between a pricing method and everything that
//! consumes prices. The closed-form Black-Scholes pricer and the Monte Carlo
//! pricer both implement it, and the finite-difference Greek estimator is
//! generic over it, so bump-and-reprice works with either.
//!
//! Any `Fn(&OptionParameters, OptionType) -> Result<f64, PricingError>`
//! closure is also a pricer, which is convenient for tests and ad-hoc models.

use crate::types::{OptionParameters, OptionType, PricingError};

/// A pricing function `P(params) -> price`.
///
/// # Contract
///
/// - Inputs are already validated ([`OptionParameters`] cannot hold invalid values)
/// - Implementations must not retain state between calls that changes the
///   expected value of the result
///
/// # Examples
///
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, PricingError};
///
/// let intrinsic = |p: &OptionParameters, ty: OptionType| -> Result<f64, PricingError> {
///     Ok(ty.intrinsic(p.spot(), p.strike()))
/// };
///
/// let params = OptionParameters::new(110.0, 100.0, 0.0, 0.2, 1.0, 1).unwrap();
/// assert_eq!(intrinsic.price(&params, OptionType::Call).unwrap(), 10.0);
/// ```
pub trait OptionPricer {
    /// Prices a European option.
    ///
    /// # Errors
    ///
    /// Implementation specific; typically `InvalidParameter` for degenerate
    /// inputs or `WorkerPool` when a simulation cannot start.
    fn price(&self, params: &OptionParameters, option_type: OptionType)
        -> Result<f64, PricingError>;

    /// True when two calls with the same input can return different prices
    /// (sampling noise). Finite-difference estimators widen their default
    /// theta step for noisy pricers.
    #[inline]
    fn is_noisy(&self) -> bool {
        false
    }
}

impl<F> OptionPricer for F
where
    F: Fn(&OptionParameters, OptionType) -> Result<f64, PricingError>,
{
    #[inline]
    fn price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        self(params, option_type)
    }
}
