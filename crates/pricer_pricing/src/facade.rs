//! Pricing facade.
//!
//! [`OptionPricingEngine`] is the single entry point used by presentation
//! layers: Monte Carlo and closed-form prices, Greeks in either mode, the
//! full results report and the volatility surface grid.
//!
//! Inputs arrive as [`OptionParameters`], which cannot hold invalid values,
//! so a request is validated exactly once (when its parameters are built)
//! and before any worker thread exists.

use pricer_core::market_data::surfaces::{VolSurfaceGrid, DEFAULT_GRID_POINTS};
use pricer_core::types::{
    Greek, GreekValues, OptionParameters, OptionType, PricingError, PricingReport,
};
use pricer_models::analytical::{AnalyticPricer, BlackScholes};

use crate::greeks::{FiniteDifferenceConfig, FiniteDifferenceEstimator, GreeksMode, RepricingSource};
use crate::mc::{MonteCarloEstimate, MonteCarloPricer, SimulationConfig};
use crate::settings::PricerSettings;

/// European option pricing engine.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::greeks::{GreeksMode, RepricingSource};
/// use pricer_pricing::OptionPricingEngine;
///
/// let engine = OptionPricingEngine::default();
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100_000).unwrap();
///
/// let analytic = engine.analytic_price(&params, OptionType::Call).unwrap();
/// assert!((analytic - 10.4506).abs() < 1e-4);
///
/// let delta = engine.delta(&params, OptionType::Call, GreeksMode::Analytic).unwrap();
/// let bumped = engine
///     .delta(&params, OptionType::Call, GreeksMode::FiniteDifference(RepricingSource::Analytic))
///     .unwrap();
/// assert!((delta - bumped).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct OptionPricingEngine {
    monte_carlo: MonteCarloPricer,
    finite_difference: FiniteDifferenceConfig,
    greeks_mode: GreeksMode,
    surface_points: usize,
}

impl Default for OptionPricingEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default(), FiniteDifferenceConfig::default())
    }
}

impl OptionPricingEngine {
    /// Creates an engine with analytic Greeks as the report default.
    pub fn new(simulation: SimulationConfig, finite_difference: FiniteDifferenceConfig) -> Self {
        Self {
            monte_carlo: MonteCarloPricer::new(simulation),
            finite_difference,
            greeks_mode: GreeksMode::Analytic,
            surface_points: DEFAULT_GRID_POINTS,
        }
    }

    /// Creates an engine from validated settings.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidConfig` if the settings fail validation.
    pub fn from_settings(settings: &PricerSettings) -> Result<Self, PricingError> {
        let engine = Self::new(
            settings.simulation_config()?,
            settings.finite_difference_config()?,
        )
        .with_greeks_mode(settings.greeks_mode);
        tracing::debug!(
            workers = engine.simulation_config().workers(),
            strategy = %engine.simulation_config().strategy(),
            greeks_mode = %engine.greeks_mode,
            "pricing engine configured"
        );
        Ok(engine)
    }

    /// Sets the Greeks mode used by [`report`](Self::report).
    #[inline]
    pub fn with_greeks_mode(mut self, mode: GreeksMode) -> Self {
        self.greeks_mode = mode;
        self
    }

    /// Sets the number of nodes per axis of the volatility surface grid.
    #[inline]
    pub fn with_surface_points(mut self, points: usize) -> Self {
        self.surface_points = points;
        self
    }

    /// Greeks mode used by [`report`](Self::report).
    #[inline]
    pub fn greeks_mode(&self) -> GreeksMode {
        self.greeks_mode
    }

    /// Simulation configuration of the Monte Carlo pricer.
    #[inline]
    pub fn simulation_config(&self) -> &SimulationConfig {
        self.monte_carlo.config()
    }

    /// Finite-difference step configuration.
    #[inline]
    pub fn finite_difference_config(&self) -> &FiniteDifferenceConfig {
        &self.finite_difference
    }

    /// Monte Carlo price.
    pub fn price_option(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        Ok(self.price_option_estimate(params, option_type)?.price)
    }

    /// Monte Carlo price with standard error.
    pub fn price_option_estimate(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<MonteCarloEstimate, PricingError> {
        self.monte_carlo.estimate(params, option_type)
    }

    /// Closed-form Black-Scholes price.
    pub fn analytic_price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        BlackScholes::price(params, option_type)
    }

    /// Delta in the given mode.
    pub fn delta(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        mode: GreeksMode,
    ) -> Result<f64, PricingError> {
        self.greek(Greek::Delta, params, option_type, mode)
    }

    /// Gamma in the given mode.
    pub fn gamma(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        mode: GreeksMode,
    ) -> Result<f64, PricingError> {
        self.greek(Greek::Gamma, params, option_type, mode)
    }

    /// Theta per calendar day in the given mode.
    pub fn theta(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        mode: GreeksMode,
    ) -> Result<f64, PricingError> {
        self.greek(Greek::Theta, params, option_type, mode)
    }

    /// Vega per volatility point in the given mode.
    pub fn vega(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        mode: GreeksMode,
    ) -> Result<f64, PricingError> {
        self.greek(Greek::Vega, params, option_type, mode)
    }

    /// Any result kind in the given mode.
    ///
    /// `Greek::Price` is the closed-form price in analytic mode and the
    /// re-pricing source's price in finite-difference mode.
    pub fn greek(
        &self,
        greek: Greek,
        params: &OptionParameters,
        option_type: OptionType,
        mode: GreeksMode,
    ) -> Result<f64, PricingError> {
        match mode {
            GreeksMode::Analytic => match greek {
                Greek::Price => BlackScholes::price(params, option_type),
                Greek::Delta => BlackScholes::delta(params, option_type),
                Greek::Gamma => BlackScholes::gamma(params, option_type),
                Greek::Theta => BlackScholes::theta(params, option_type),
                Greek::Vega => BlackScholes::vega(params, option_type),
            },
            GreeksMode::FiniteDifference(RepricingSource::Analytic) => {
                FiniteDifferenceEstimator::new(&AnalyticPricer, self.finite_difference)
                    .greek(greek, params, option_type)
            }
            GreeksMode::FiniteDifference(RepricingSource::MonteCarlo) => {
                FiniteDifferenceEstimator::new(&self.monte_carlo, self.finite_difference)
                    .greek(greek, params, option_type)
            }
        }
    }

    /// The full results grid for both option types.
    ///
    /// Monte Carlo prices come from the simulator; the `price` of each
    /// [`GreekValues`] is always the closed-form price, and the Greeks use
    /// the engine's [`greeks_mode`](Self::greeks_mode).
    pub fn report(&self, params: &OptionParameters) -> Result<PricingReport, PricingError> {
        let report = PricingReport {
            monte_carlo_call: self.price_option(params, OptionType::Call)?,
            monte_carlo_put: self.price_option(params, OptionType::Put)?,
            call: self.greek_values(params, OptionType::Call)?,
            put: self.greek_values(params, OptionType::Put)?,
        };
        tracing::debug!(
            mode = %self.greeks_mode,
            samples = params.n_samples(),
            mc_call = report.monte_carlo_call,
            bs_call = report.call.price,
            "pricing report complete"
        );
        Ok(report)
    }

    fn greek_values(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<GreekValues, PricingError> {
        if self.greeks_mode == GreeksMode::Analytic {
            return BlackScholes::greeks(params, option_type);
        }
        let mut values = GreekValues {
            price: BlackScholes::price(params, option_type)?,
            ..Default::default()
        };
        for greek in [Greek::Delta, Greek::Gamma, Greek::Theta, Greek::Vega] {
            values.set(greek, self.greek(greek, params, option_type, self.greeks_mode)?);
        }
        Ok(values)
    }

    /// Smile volatility surface sampled around the request.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidConfig` when the grid has fewer than two
    /// points per axis.
    pub fn volatility_surface(&self, params: &OptionParameters) -> Result<VolSurfaceGrid, PricingError> {
        Ok(VolSurfaceGrid::around(params, self.surface_points)?)
    }
}
