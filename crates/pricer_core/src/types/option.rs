//! European option inputs.
//!
//! [`OptionParameters`] can only be built through a validating constructor,
//! so every value that reaches a pricer satisfies the domain invariants:
//! spot, strike, volatility and maturity strictly positive and finite, a
//! finite rate, and at least one Monte Carlo sample.

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Payoff direction of a European option.
///
/// - `Call`: pays max(S_T − K, 0)
/// - `Put`: pays max(K − S_T, 0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Both option types, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Strike-comparison direction: +1 for calls, −1 for puts.
    ///
    /// The payoff of either type is `max(sign · (S_T − K), 0)`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Returns true for calls.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value at the given terminal price.
    #[inline]
    pub fn intrinsic(self, terminal: f64, strike: f64) -> f64 {
        (self.sign() * (terminal - strike)).max(0.0)
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Validated inputs for one pricing request.
///
/// # Invariants
///
/// - `spot`, `strike`, `volatility`, `maturity` are finite and > 0
/// - `rate` is finite (may be zero or negative)
/// - `n_samples` >= 1
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 95.0, 0.05, 0.2, 0.5, 100_000).unwrap();
/// assert_eq!(params.strike(), 95.0);
///
/// // Bumped copies are re-validated
/// let bumped = params.with_spot(101.0).unwrap();
/// assert_eq!(bumped.spot(), 101.0);
/// assert!(params.with_maturity(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOptionParameters")]
pub struct OptionParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_samples: u64,
}

/// Unvalidated mirror used for deserialisation.
#[derive(Deserialize)]
struct RawOptionParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_samples: u64,
}

impl TryFrom<RawOptionParameters> for OptionParameters {
    type Error = PricingError;

    fn try_from(raw: RawOptionParameters) -> Result<Self, Self::Error> {
        OptionParameters::new(
            raw.spot,
            raw.strike,
            raw.rate,
            raw.volatility,
            raw.maturity,
            raw.n_samples,
        )
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid_parameter(
            name,
            value,
            "must be strictly positive",
        ));
    }
    Ok(())
}

impl OptionParameters {
    /// Creates validated option parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current underlying price S
    /// * `strike` - Strike price K
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `volatility` - Annualised volatility v
    /// * `maturity` - Time to maturity T in years
    /// * `n_samples` - Monte Carlo sample count N
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        n_samples: u64,
    ) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter("rate", rate, "must be finite"));
        }
        require_positive("volatility", volatility)?;
        require_positive("maturity", maturity)?;
        if n_samples == 0 {
            return Err(PricingError::invalid_parameter(
                "n_samples",
                0.0,
                "at least one sample is required",
            ));
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            n_samples,
        })
    }

    /// Spot price S.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility v.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Time to maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Monte Carlo sample count N.
    #[inline]
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(
            spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            self.n_samples,
        )
    }

    /// Copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.rate,
            volatility,
            self.maturity,
            self.n_samples,
        )
    }

    /// Copy with a different maturity, re-validated.
    pub fn with_maturity(&self, maturity: f64) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            maturity,
            self.n_samples,
        )
    }

    /// Copy with a different sample count, re-validated.
    pub fn with_samples(&self, n_samples: u64) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            n_samples,
        )
    }
}
