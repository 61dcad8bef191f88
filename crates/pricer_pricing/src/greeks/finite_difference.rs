//! Bump-and-reprice Greeks over any [`OptionPricer`].
//!
//! Results use the same units as the closed-form module so the two can be
//! compared directly: theta per calendar day, vega per volatility point.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{Greek, OptionParameters, OptionType, PricingError};
use pricer_models::analytical::{DAYS_PER_YEAR, VEGA_SCALE};

use super::config::{FiniteDifferenceConfig, GammaMethod};

/// Finite-difference Greek estimator.
///
/// When the pricer is a Monte Carlo pricer, every Greek reruns the full
/// simulation once per re-pricing (two for delta, theta and vega; three or
/// four for gamma), so cost scales with the sample count.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::{AnalyticPricer, BlackScholes};
/// use pricer_pricing::greeks::{FiniteDifferenceConfig, FiniteDifferenceEstimator};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1).unwrap();
/// let fd = FiniteDifferenceEstimator::new(&AnalyticPricer, FiniteDifferenceConfig::default());
///
/// let bumped = fd.delta(&params, OptionType::Call).unwrap();
/// let exact = BlackScholes::delta(&params, OptionType::Call).unwrap();
/// assert!((bumped - exact).abs() < 1e-4);
/// ```
#[derive(Debug)]
pub struct FiniteDifferenceEstimator<'a, P: OptionPricer + ?Sized> {
    pricer: &'a P,
    config: FiniteDifferenceConfig,
}

impl<'a, P: OptionPricer + ?Sized> FiniteDifferenceEstimator<'a, P> {
    /// Creates an estimator that re-prices with `pricer`.
    #[inline]
    pub fn new(pricer: &'a P, config: FiniteDifferenceConfig) -> Self {
        Self { pricer, config }
    }

    /// Returns the step configuration.
    #[inline]
    pub fn config(&self) -> &FiniteDifferenceConfig {
        &self.config
    }

    /// Delta by central difference: `(P(S+h) − P(S−h)) / 2h`, `h = bump·S`.
    pub fn delta(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        self.delta_with_bump(params, option_type, self.config.delta_bump())
    }

    /// Delta with an explicit relative bump, overriding the configured one.
    pub fn delta_with_bump(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        relative_bump: f64,
    ) -> Result<f64, PricingError> {
        let spot = params.spot();
        let h = relative_bump * spot;
        let up = self.pricer.price(&params.with_spot(spot + h)?, option_type)?;
        let down = self.pricer.price(&params.with_spot(spot - h)?, option_type)?;
        finite("delta", (up - down) / (2.0 * h))
    }

    /// Gamma using the configured [`GammaMethod`].
    pub fn gamma(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        let spot = params.spot();
        let value = match self.config.gamma_method() {
            GammaMethod::SecondDifference { relative_bump } => {
                let h = relative_bump * spot;
                let up = self.pricer.price(&params.with_spot(spot + h)?, option_type)?;
                let mid = self.pricer.price(params, option_type)?;
                let down = self.pricer.price(&params.with_spot(spot - h)?, option_type)?;
                (up - 2.0 * mid + down) / (h * h)
            }
            GammaMethod::DeltaDifference { relative_bump } => {
                let h = relative_bump * spot;
                let up = self.delta(&params.with_spot(spot + h)?, option_type)?;
                let down = self.delta(&params.with_spot(spot - h)?, option_type)?;
                (up - down) / (2.0 * h)
            }
        };
        finite("gamma", value)
    }

    /// Theta per calendar day: `(P(T−h) − P(T)) / h / 365`.
    ///
    /// Negative when the option loses value as maturity shortens. The step
    /// comes from [`FiniteDifferenceConfig::theta_step_for`] with the wrapped pricer.
    ///
    /// # Errors
    ///
    /// `InvalidParameter("theta_step")` when the step is not smaller than
    /// the maturity.
    pub fn theta(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        let h = self.config.theta_step_for(self.pricer);
        let maturity = params.maturity();
        if h >= maturity {
            return Err(PricingError::invalid_parameter(
                "theta_step",
                h,
                format!("must be smaller than maturity {maturity}"),
            ));
        }
        let now = self.pricer.price(params, option_type)?;
        let later = self.pricer.price(&params.with_maturity(maturity - h)?, option_type)?;
        finite("theta", (later - now) / h / DAYS_PER_YEAR)
    }

    /// Vega per volatility point: `(P(σ+h) − P(σ)) / h / 100`.
    pub fn vega(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        let h = self.config.vega_step();
        let vol = params.volatility();
        let up = self.pricer.price(&params.with_volatility(vol + h)?, option_type)?;
        let base = self.pricer.price(params, option_type)?;
        finite("vega", (up - base) / h / VEGA_SCALE)
    }

    /// Dispatches on `greek`; `Greek::Price` is a plain pricer call.
    pub fn greek(
        &self,
        greek: Greek,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        match greek {
            Greek::Price => self.pricer.price(params, option_type),
            Greek::Delta => self.delta(params, option_type),
            Greek::Gamma => self.gamma(params, option_type),
            Greek::Theta => self.theta(params, option_type),
            Greek::Vega => self.vega(params, option_type),
        }
    }
}

#[inline]
fn finite(greek: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericalInstability(format!(
            "finite-difference {greek} is not finite ({value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pricer_models::analytical::{AnalyticPricer, BlackScholes};
    use crate::greeks::{DEFAULT_MONTE_CARLO_THETA_STEP, DEFAULT_THETA_STEP};
    use std::cell::{Cell, RefCell};

    fn atm() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1).unwrap()
    }

    fn estimator(config: FiniteDifferenceConfig) -> FiniteDifferenceEstimator<'static, AnalyticPricer> {
        FiniteDifferenceEstimator::new(&AnalyticPricer, config)
    }

    #[test]
    fn test_matches_closed_form_greeks() {
        let fd = estimator(FiniteDifferenceConfig::default());
        for ty in OptionType::ALL {
            let exact = BlackScholes::greeks(&atm(), ty).unwrap();
            assert_abs_diff_eq!(fd.delta(&atm(), ty).unwrap(), exact.delta, epsilon = 1e-4);
            assert_abs_diff_eq!(fd.gamma(&atm(), ty).unwrap(), exact.gamma, epsilon = 1e-4);
            assert_abs_diff_eq!(fd.theta(&atm(), ty).unwrap(), exact.theta, epsilon = 1e-4);
            assert_abs_diff_eq!(fd.vega(&atm(), ty).unwrap(), exact.vega, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_second_difference_gamma() {
        let config = FiniteDifferenceConfig::builder()
            .gamma_method(GammaMethod::SecondDifference { relative_bump: 0.01 })
            .build()
            .unwrap();
        let gamma = estimator(config).gamma(&atm(), OptionType::Call).unwrap();
        let exact = BlackScholes::gamma(&atm(), OptionType::Call).unwrap();
        assert_abs_diff_eq!(gamma, exact, epsilon = 1e-5);
    }

    #[test]
    fn test_theta_step_must_be_below_maturity() {
        let config = FiniteDifferenceConfig::builder()
            .theta_step(0.5)
            .build()
            .unwrap();
        let short = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 0.25, 1).unwrap();
        let err = estimator(config).theta(&short, OptionType::Call).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                name: "theta_step",
                ..
            }
        ));
    }

    struct MaturityRecorder {
        noisy: bool,
        maturities: RefCell<Vec<f64>>,
    }

    impl OptionPricer for MaturityRecorder {
        fn price(&self, p: &OptionParameters, ty: OptionType) -> Result<f64, PricingError> {
            self.maturities.borrow_mut().push(p.maturity());
            BlackScholes::price(p, ty)
        }

        fn is_noisy(&self) -> bool {
            self.noisy
        }
    }

    #[test]
    fn test_theta_step_widens_for_noisy_pricers() {
        for (noisy, step) in [(false, DEFAULT_THETA_STEP), (true, DEFAULT_MONTE_CARLO_THETA_STEP)] {
            let pricer = MaturityRecorder {
                noisy,
                maturities: RefCell::new(Vec::new()),
            };
            let fd = FiniteDifferenceEstimator::new(&pricer, FiniteDifferenceConfig::default());
            fd.theta(&atm(), OptionType::Call).unwrap();
            assert_eq!(*pricer.maturities.borrow(), vec![1.0, 1.0 - step]);
        }
    }

    #[test]
    fn test_repricing_counts() {
        let calls = Cell::new(0_usize);
        let counting = |p: &OptionParameters, ty: OptionType| {
            calls.set(calls.get() + 1);
            BlackScholes::price(p, ty)
        };
        let fd = FiniteDifferenceEstimator::new(&counting, FiniteDifferenceConfig::default());

        let count = |f: &dyn Fn() -> Result<f64, PricingError>| {
            calls.set(0);
            f().unwrap();
            calls.get()
        };
        assert_eq!(count(&|| fd.delta(&atm(), OptionType::Call)), 2);
        assert_eq!(count(&|| fd.theta(&atm(), OptionType::Call)), 2);
        assert_eq!(count(&|| fd.vega(&atm(), OptionType::Call)), 2);
        assert_eq!(count(&|| fd.gamma(&atm(), OptionType::Call)), 4);
    }

    #[test]
    fn test_pricer_errors_propagate() {
        let failing = |_: &OptionParameters, _: OptionType| -> Result<f64, PricingError> {
            Err(PricingError::WorkerPool("no threads".to_string()))
        };
        let fd = FiniteDifferenceEstimator::new(&failing, FiniteDifferenceConfig::default());
        for greek in Greek::ALL {
            assert!(matches!(
                fd.greek(greek, &atm(), OptionType::Put),
                Err(PricingError::WorkerPool(_))
            ));
        }
    }
}
