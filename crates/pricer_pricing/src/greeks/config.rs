//! Finite-difference step configuration and Greeks dispatch modes.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::OptionPricer;
use serde::{Deserialize, Serialize};

use crate::mc::ConfigError;

/// Default relative spot bump for delta.
pub const DEFAULT_DELTA_BUMP: f64 = 0.01;
/// Default relative spot bump for gamma as a second difference of prices.
pub const DEFAULT_GAMMA_PRICE_BUMP: f64 = 0.01;
/// Default relative spot bump for gamma as a difference of deltas.
pub const DEFAULT_GAMMA_DELTA_BUMP: f64 = 0.03;
/// Default maturity step for theta with a deterministic pricer, in years
/// (one calendar day).
pub const DEFAULT_THETA_STEP: f64 = 1.0 / 365.0;
/// Default maturity step for theta with a noisy pricer, in years.
///
/// The two re-pricings are independent simulations, so their noise is
/// divided by the step; one day would amplify it 365-fold.
pub const DEFAULT_MONTE_CARLO_THETA_STEP: f64 = 0.05;
/// Default absolute volatility bump for vega.
pub const DEFAULT_VEGA_STEP: f64 = 0.01;

/// How gamma is estimated by bump-and-reprice.
///
/// Bumps are relative to spot: `h = relative_bump · S`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum GammaMethod {
    /// `(P(S+h) − 2P(S) + P(S−h)) / h²`, three re-pricings.
    SecondDifference {
        /// Bump as a fraction of spot.
        relative_bump: f64,
    },
    /// `(Δ(S+h) − Δ(S−h)) / 2h`, four re-pricings. The wider step damps
    /// Monte Carlo noise.
    DeltaDifference {
        /// Bump as a fraction of spot.
        relative_bump: f64,
    },
}

impl GammaMethod {
    /// Bump as a fraction of spot.
    #[inline]
    pub fn relative_bump(&self) -> f64 {
        match *self {
            GammaMethod::SecondDifference { relative_bump }
            | GammaMethod::DeltaDifference { relative_bump } => relative_bump,
        }
    }

    /// Number of pricer calls per gamma evaluation.
    #[inline]
    pub fn repricings(&self) -> usize {
        match self {
            GammaMethod::SecondDifference { .. } => 3,
            GammaMethod::DeltaDifference { .. } => 4,
        }
    }
}

impl Default for GammaMethod {
    fn default() -> Self {
        GammaMethod::DeltaDifference {
            relative_bump: DEFAULT_GAMMA_DELTA_BUMP,
        }
    }
}

/// Validated step sizes for bump-and-reprice Greeks.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::AnalyticPricer;
/// use pricer_pricing::greeks::{FiniteDifferenceConfig, GammaMethod};
///
/// let config = FiniteDifferenceConfig::builder()
///     .delta_bump(0.005)
///     .gamma_method(GammaMethod::SecondDifference { relative_bump: 0.01 })
///     .vega_step(0.005)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.delta_bump(), 0.005);
/// assert_eq!(config.theta_step(), None);
/// assert_eq!(config.theta_step_for(&AnalyticPricer), 1.0 / 365.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiniteDifferenceConfig {
    delta_bump: f64,
    gamma_method: GammaMethod,
    theta_step: Option<f64>,
    vega_step: f64,
}

impl FiniteDifferenceConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> FiniteDifferenceConfigBuilder {
        FiniteDifferenceConfigBuilder::default()
    }

    /// Relative spot bump for delta.
    #[inline]
    pub fn delta_bump(&self) -> f64 {
        self.delta_bump
    }

    /// Gamma estimation method.
    #[inline]
    pub fn gamma_method(&self) -> GammaMethod {
        self.gamma_method
    }

    /// Explicit maturity step for theta, in years; `None` when the
    /// pricer-dependent default applies.
    #[inline]
    pub fn theta_step(&self) -> Option<f64> {
        self.theta_step
    }

    /// Maturity step used for theta with `pricer`: the explicit step, else
    /// [`DEFAULT_MONTE_CARLO_THETA_STEP`] for noisy pricers and
    /// [`DEFAULT_THETA_STEP`] otherwise.
    #[inline]
    pub fn theta_step_for<P: OptionPricer + ?Sized>(&self, pricer: &P) -> f64 {
        match self.theta_step {
            Some(step) => step,
            None if pricer.is_noisy() => DEFAULT_MONTE_CARLO_THETA_STEP,
            None => DEFAULT_THETA_STEP,
        }
    }

    /// Absolute volatility bump for vega.
    #[inline]
    pub fn vega_step(&self) -> f64 {
        self.vega_step
    }
}

impl Default for FiniteDifferenceConfig {
    fn default() -> Self {
        Self {
            delta_bump: DEFAULT_DELTA_BUMP,
            gamma_method: GammaMethod::default(),
            theta_step: None,
            vega_step: DEFAULT_VEGA_STEP,
        }
    }
}

/// Builder for [`FiniteDifferenceConfig`]. Unset steps take the defaults.
#[derive(Clone, Debug, Default)]
pub struct FiniteDifferenceConfigBuilder {
    delta_bump: Option<f64>,
    gamma_method: Option<GammaMethod>,
    theta_step: Option<f64>,
    vega_step: Option<f64>,
}

impl FiniteDifferenceConfigBuilder {
    /// Sets the relative spot bump for delta.
    #[inline]
    pub fn delta_bump(mut self, bump: f64) -> Self {
        self.delta_bump = Some(bump);
        self
    }

    /// Sets the gamma method and its bump.
    #[inline]
    pub fn gamma_method(mut self, method: GammaMethod) -> Self {
        self.gamma_method = Some(method);
        self
    }

    /// Sets the theta maturity step in years.
    #[inline]
    pub fn theta_step(mut self, step: f64) -> Self {
        self.theta_step = Some(step);
        self
    }

    /// Sets the absolute vega bump.
    #[inline]
    pub fn vega_step(mut self, step: f64) -> Self {
        self.vega_step = Some(step);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidParameter` if any step is non-finite or not
    /// positive, or a relative spot bump is not below 1.
    pub fn build(self) -> Result<FiniteDifferenceConfig, ConfigError> {
        let config = FiniteDifferenceConfig {
            delta_bump: self.delta_bump.unwrap_or(DEFAULT_DELTA_BUMP),
            gamma_method: self.gamma_method.unwrap_or_default(),
            theta_step: self.theta_step,
            vega_step: self.vega_step.unwrap_or(DEFAULT_VEGA_STEP),
        };

        check_relative("delta_bump", config.delta_bump)?;
        check_relative("gamma_bump", config.gamma_method.relative_bump())?;
        if let Some(step) = config.theta_step {
            check_positive("theta_step", step)?;
        }
        check_positive("vega_step", config.vega_step)?;
        Ok(config)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: format!("{value} (must be positive and finite)"),
        })
    }
}

fn check_relative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    check_positive(name, value)?;
    if value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: format!("{value} (relative bump must be below 1)"),
        })
    }
}

/// Which pricer is re-run by bump-and-reprice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepricingSource {
    /// Closed-form Black-Scholes prices.
    Analytic,
    /// Monte Carlo prices; every bump reruns the full simulation.
    MonteCarlo,
}

/// How a Greek is computed.
///
/// Parsed from and displayed as `"analytic"`, `"fd-analytic"` or
/// `"fd-monte-carlo"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GreeksMode {
    /// Closed-form derivatives.
    #[default]
    Analytic,
    /// Bump-and-reprice against the given pricer.
    FiniteDifference(RepricingSource),
}

impl fmt::Display for GreeksMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GreeksMode::Analytic => "analytic",
            GreeksMode::FiniteDifference(RepricingSource::Analytic) => "fd-analytic",
            GreeksMode::FiniteDifference(RepricingSource::MonteCarlo) => "fd-monte-carlo",
        })
    }
}

impl FromStr for GreeksMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analytic" => Ok(GreeksMode::Analytic),
            "fd-analytic" => Ok(GreeksMode::FiniteDifference(RepricingSource::Analytic)),
            "fd-monte-carlo" | "fd-mc" => {
                Ok(GreeksMode::FiniteDifference(RepricingSource::MonteCarlo))
            }
            other => Err(ConfigError::InvalidParameter {
                name: "greeks_mode",
                value: format!("'{other}' (expected analytic, fd-analytic or fd-monte-carlo)"),
            }),
        }
    }
}

impl TryFrom<String> for GreeksMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GreeksMode> for String {
    fn from(mode: GreeksMode) -> Self {
        mode.to_string()
    }
}
