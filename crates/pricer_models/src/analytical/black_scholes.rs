//! Black-Scholes closed-form pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·(1 - N(d₂)) - S·(1 - N(d₁))
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Units
//!
//! - Theta is reported per calendar day (annual theta / [`DAYS_PER_YEAR`])
//! - Vega is reported per one volatility point (∂V/∂σ / [`VEGA_SCALE`])
//!
//! Every function here is pure: the intermediate factors live in an
//! [`AnalyticFactors`] value owned by the caller's stack frame.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{GreekValues, OptionParameters, OptionType, PricingError};

use super::distributions::{norm_cdf, norm_pdf};

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Vega is divided by this to express sensitivity per 1% volatility move.
pub const VEGA_SCALE: f64 = 100.0;

/// Intermediate quantities shared by the price and every Greek.
///
/// Computed fresh per call; cheap to copy.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::AnalyticFactors;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1).unwrap();
/// let f = AnalyticFactors::new(&params).unwrap();
/// assert!((f.d1 - 0.35).abs() < 1e-12);
/// assert!((f.d1 - f.d2 - 0.2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyticFactors {
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// N(d₁)
    pub nd1: f64,
    /// N(d₂)
    pub nd2: f64,
    /// φ(d₁), the standard normal density at d₁
    pub pdf_d1: f64,
    /// √T
    pub sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
}

impl AnalyticFactors {
    /// Computes the factors for `params`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter("volatility")` when σ√T underflows to zero or d₁ is
    /// not finite. Both happen only for vanishing volatility or maturity.
    pub fn new(params: &OptionParameters) -> Result<Self, PricingError> {
        let spot = params.spot();
        let strike = params.strike();
        let vol = params.volatility();
        let sqrt_t = params.maturity().sqrt();
        let vol_sqrt_t = vol * sqrt_t;

        if vol_sqrt_t <= 0.0 || !vol_sqrt_t.is_finite() {
            return Err(PricingError::invalid_parameter(
                "volatility",
                vol,
                format!(
                    "total volatility σ√T = {} is degenerate (maturity {})",
                    vol_sqrt_t,
                    params.maturity()
                ),
            ));
        }

        let d1 = ((spot / strike).ln() + (params.rate() + 0.5 * vol * vol) * params.maturity())
            / vol_sqrt_t;
        if !d1.is_finite() {
            return Err(PricingError::invalid_parameter(
                "volatility",
                vol,
                format!("d1 is not finite ({d1})"),
            ));
        }
        let d2 = d1 - vol_sqrt_t;

        Ok(Self {
            d1,
            d2,
            nd1: norm_cdf(d1),
            nd2: norm_cdf(d2),
            pdf_d1: norm_pdf(d1),
            sqrt_t,
            discount: params.discount_factor(),
        })
    }
}

/// Stateless closed-form Black-Scholes model.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1).unwrap();
/// let call = BlackScholes::price(&params, OptionType::Call).unwrap();
/// let put = BlackScholes::price(&params, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BlackScholes;

impl BlackScholes {
    /// Present value of the option.
    pub fn price(params: &OptionParameters, option_type: OptionType) -> Result<f64, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(Self::price_from(&f, params, option_type))
    }

    /// Delta (∂V/∂S): N(d₁) for a call, N(d₁) - 1 for a put.
    pub fn delta(params: &OptionParameters, option_type: OptionType) -> Result<f64, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(Self::delta_from(&f, option_type))
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts.
    pub fn gamma(params: &OptionParameters, _option_type: OptionType) -> Result<f64, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(Self::gamma_from(&f, params))
    }

    /// Theta per calendar day.
    ///
    /// - Call: [-S·σ·φ(d₁)/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// - Put:  [-S·σ·φ(d₁)/(2√T) + r·K·e^(-rT)·(1 - N(d₂))] / 365
    pub fn theta(params: &OptionParameters, option_type: OptionType) -> Result<f64, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(Self::theta_from(&f, params, option_type))
    }

    /// Vega per volatility point, identical for calls and puts.
    pub fn vega(params: &OptionParameters, _option_type: OptionType) -> Result<f64, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(Self::vega_from(&f, params))
    }

    /// Price and all Greeks from a single factor evaluation.
    pub fn greeks(
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<GreekValues, PricingError> {
        let f = AnalyticFactors::new(params)?;
        Ok(GreekValues {
            price: Self::price_from(&f, params, option_type),
            delta: Self::delta_from(&f, option_type),
            gamma: Self::gamma_from(&f, params),
            theta: Self::theta_from(&f, params, option_type),
            vega: Self::vega_from(&f, params),
        })
    }

    #[inline]
    fn price_from(f: &AnalyticFactors, params: &OptionParameters, option_type: OptionType) -> f64 {
        let spot = params.spot();
        let strike = params.strike();
        match option_type {
            OptionType::Call => spot * f.nd1 - strike * f.discount * f.nd2,
            OptionType::Put => strike * f.discount * (1.0 - f.nd2) - spot * (1.0 - f.nd1),
        }
    }

    #[inline]
    fn delta_from(f: &AnalyticFactors, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => f.nd1,
            OptionType::Put => f.nd1 - 1.0,
        }
    }

    #[inline]
    fn gamma_from(f: &AnalyticFactors, params: &OptionParameters) -> f64 {
        f.pdf_d1 / (params.spot() * params.volatility() * f.sqrt_t)
    }

    #[inline]
    fn theta_from(f: &AnalyticFactors, params: &OptionParameters, option_type: OptionType) -> f64 {
        let decay = -params.spot() * params.volatility() * f.pdf_d1 / (2.0 * f.sqrt_t);
        let carry = params.rate() * params.strike() * f.discount;
        let annual = match option_type {
            OptionType::Call => decay - carry * f.nd2,
            OptionType::Put => decay + carry * (1.0 - f.nd2),
        };
        annual / DAYS_PER_YEAR
    }

    #[inline]
    fn vega_from(f: &AnalyticFactors, params: &OptionParameters) -> f64 {
        params.spot() * f.sqrt_t * f.pdf_d1 / VEGA_SCALE
    }
}

/// [`OptionPricer`] backed by the closed-form formulas.
///
/// Used as the re-pricing function when bump-and-reprice Greeks are checked
/// against their analytic counterparts.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyticPricer;

impl OptionPricer for AnalyticPricer {
    #[inline]
    fn price(&self, params: &OptionParameters, option_type: OptionType) -> Result<f64, PricingError> {
        BlackScholes::price(params, option_type)
    }
}
