//! Sensitivity kinds and per-option result sets.

use serde::{Deserialize, Serialize};

use super::option::OptionType;

/// Result kind reported for an option.
///
/// - `Price`: present value
/// - `Delta`: ∂V/∂S
/// - `Gamma`: ∂²V/∂S²
/// - `Theta`: time decay, per calendar day
/// - `Vega`: ∂V/∂σ per one volatility point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greek {
    /// Present value.
    Price,
    /// Sensitivity to spot.
    Delta,
    /// Sensitivity of delta to spot.
    Gamma,
    /// Sensitivity to the passage of time.
    Theta,
    /// Sensitivity to volatility.
    Vega,
}

impl Greek {
    /// Every kind, in report order.
    pub const ALL: [Greek; 5] = [
        Greek::Price,
        Greek::Delta,
        Greek::Gamma,
        Greek::Theta,
        Greek::Vega,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Greek::Price => "Price",
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
        }
    }
}

impl std::fmt::Display for Greek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Price and Greeks of a single option.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Greek, GreekValues};
///
/// let values = GreekValues { price: 10.45, delta: 0.64, ..Default::default() };
/// assert_eq!(values.get(Greek::Delta), 0.64);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GreekValues {
    /// Present value.
    pub price: f64,
    /// Delta.
    pub delta: f64,
    /// Gamma.
    pub gamma: f64,
    /// Theta (per calendar day).
    pub theta: f64,
    /// Vega (per volatility point).
    pub vega: f64,
}

impl GreekValues {
    /// Value for the requested kind.
    #[inline]
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Price => self.price,
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Theta => self.theta,
            Greek::Vega => self.vega,
        }
    }

    /// Sets the value for the requested kind.
    #[inline]
    pub fn set(&mut self, greek: Greek, value: f64) {
        match greek {
            Greek::Price => self.price = value,
            Greek::Delta => self.delta = value,
            Greek::Gamma => self.gamma = value,
            Greek::Theta => self.theta = value,
            Greek::Vega => self.vega = value,
        }
    }
}

/// Full result set for one set of inputs: Monte Carlo prices plus price and
/// Greeks for both the call and the put.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    /// Monte Carlo call price.
    pub monte_carlo_call: f64,
    /// Monte Carlo put price.
    pub monte_carlo_put: f64,
    /// Closed-form call price and Greeks.
    pub call: GreekValues,
    /// Closed-form put price and Greeks.
    pub put: GreekValues,
}

impl PricingReport {
    /// Monte Carlo price for the given option type.
    #[inline]
    pub fn monte_carlo(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.monte_carlo_call,
            OptionType::Put => self.monte_carlo_put,
        }
    }

    /// Price and Greeks for the given option type.
    #[inline]
    pub fn values(&self, option_type: OptionType) -> &GreekValues {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}
