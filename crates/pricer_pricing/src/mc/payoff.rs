//! Per-sample payoff evaluation.
//!
//! A [`SamplePayoff`] maps one standard normal draw `Z` to an undiscounted
//! payoff. The simulator sums these values; discounting and averaging happen
//! in the pricer.

use pricer_core::types::{OptionParameters, OptionType};
use wide::f64x4;

/// Undiscounted payoff as a function of a standard normal draw.
///
/// `Sync` is required because one payoff is shared by every worker.
pub trait SamplePayoff: Sync {
    /// Payoff for a single draw.
    fn evaluate(&self, z: f64) -> f64;

    /// Payoff for four draws at once.
    ///
    /// The default evaluates each lane with [`evaluate`](Self::evaluate).
    #[inline]
    fn evaluate_x4(&self, z: f64x4) -> f64x4 {
        let [a, b, c, d] = z.to_array();
        f64x4::from([
            self.evaluate(a),
            self.evaluate(b),
            self.evaluate(c),
            self.evaluate(d),
        ])
    }
}

impl<F> SamplePayoff for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn evaluate(&self, z: f64) -> f64 {
        self(z)
    }
}

/// European call or put payoff on a lognormal terminal price.
///
/// `S_T = S · exp((r − ½σ²)T + σ√T·Z)`; the drift and diffusion terms are
/// precomputed once per pricing call.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::mc::{EuropeanPayoff, SamplePayoff};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.0, 0.2, 1.0, 1).unwrap();
/// let call = EuropeanPayoff::new(&params, OptionType::Call);
///
/// // Z = σ√T / 2 puts the terminal price exactly at the spot
/// assert!(call.evaluate(0.1).abs() < 1e-12);
/// assert!(call.evaluate(3.0) > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuropeanPayoff {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    drift: f64,
    diffusion: f64,
}

impl EuropeanPayoff {
    /// Precomputes the terminal-price transform for `params`.
    pub fn new(params: &OptionParameters, option_type: OptionType) -> Self {
        let vol = params.volatility();
        let maturity = params.maturity();
        Self {
            option_type,
            spot: params.spot(),
            strike: params.strike(),
            drift: (params.rate() - 0.5 * vol * vol) * maturity,
            diffusion: vol * maturity.sqrt(),
        }
    }

    /// Option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Terminal asset price for draw `z`.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }
}

impl SamplePayoff for EuropeanPayoff {
    #[inline]
    fn evaluate(&self, z: f64) -> f64 {
        let terminal = self.terminal_price(z);
        match self.option_type {
            OptionType::Call => (terminal - self.strike).max(0.0),
            OptionType::Put => (self.strike - terminal).max(0.0),
        }
    }

    #[inline]
    fn evaluate_x4(&self, z: f64x4) -> f64x4 {
        let zero = f64x4::splat(0.0);
        let strike = f64x4::splat(self.strike);
        let exponent = z.mul_add(f64x4::splat(self.diffusion), f64x4::splat(self.drift));
        let terminal = f64x4::splat(self.spot) * exponent.exp();
        match self.option_type {
            OptionType::Call => (terminal - strike).max(zero),
            OptionType::Put => (strike - terminal).max(zero),
        }
    }
}
