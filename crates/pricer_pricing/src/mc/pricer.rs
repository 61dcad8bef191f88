//! Monte Carlo European option pricer.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType, PricingError};

use super::config::SimulationConfig;
use super::payoff::EuropeanPayoff;
use super::simulator::ParallelSimulator;
use crate::rng::EnginePool;

/// Monte Carlo price with its sampling error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloEstimate;
///
/// let estimate = MonteCarloEstimate {
///     price: 10.45,
///     std_error: 0.05,
///     samples: 100_000,
/// };
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MonteCarloEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of samples drawn.
    pub samples: u64,
}

impl MonteCarloEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine for European options.
///
/// Stateless between calls: every call builds its own entropy-seeded
/// [`EnginePool`] and worker threads, so one pricer can be shared freely
/// across threads.
///
/// Price = e^(−rT) · Σ payoff / N, where N is the requested sample count
/// regardless of how many workers split the work.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
///
/// let config = SimulationConfig::builder().workers(2).build().unwrap();
/// let pricer = MonteCarloPricer::new(config);
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 200_000).unwrap();
/// let estimate = pricer.estimate(&params, OptionType::Call).unwrap();
///
/// // Closed-form value is 10.4506
/// assert!((estimate.price - 10.4506).abs() < 6.0 * estimate.std_error);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloPricer {
    simulator: ParallelSimulator,
}

impl MonteCarloPricer {
    /// Creates a pricer with the given simulation configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            simulator: ParallelSimulator::new(config),
        }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        self.simulator.config()
    }

    /// Prices the option and reports the standard error.
    ///
    /// # Errors
    ///
    /// - `PricingError::WorkerPool` if worker threads cannot be started
    /// - `PricingError::NumericalInstability` if the estimate is not finite
    pub fn estimate(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<MonteCarloEstimate, PricingError> {
        let payoff = EuropeanPayoff::new(params, option_type);
        let mut engines = EnginePool::new(self.config().workers());
        let acc = self
            .simulator
            .run(&mut engines, &payoff, params.n_samples())?;

        let discount = params.discount_factor();
        let estimate = MonteCarloEstimate {
            price: discount * acc.sum() / params.n_samples() as f64,
            std_error: discount * acc.std_error(),
            samples: acc.count(),
        };

        if !estimate.price.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "Monte Carlo {option_type} price is not finite ({})",
                estimate.price
            )));
        }
        Ok(estimate)
    }
}

impl OptionPricer for MonteCarloPricer {
    fn price(&self, params: &OptionParameters, option_type: OptionType) -> Result<f64, PricingError> {
        Ok(self.estimate(params, option_type)?.price)
    }

    /// Every call draws fresh entropy-seeded engines.
    #[inline]
    fn is_noisy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::ExecutionStrategy;
    use approx::assert_relative_eq;

    fn pricer(workers: usize) -> MonteCarloPricer {
        MonteCarloPricer::new(
            SimulationConfig::builder()
                .workers(workers)
                .strategy(ExecutionStrategy::Scalar)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_pricing_result_confidence() {
        let estimate = MonteCarloEstimate {
            price: 10.0,
            std_error: 0.1,
            samples: 1,
        };
        assert_relative_eq!(estimate.confidence_95(), 1.96 * 0.1, epsilon = 1e-10);
        assert_relative_eq!(estimate.confidence_99(), 2.576 * 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_estimate_reports_samples_and_error() {
        let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 50_000).unwrap();
        let estimate = pricer(4).estimate(&params, OptionType::Call).unwrap();
        assert_eq!(estimate.samples, 50_000);
        assert!(estimate.std_error > 0.0);
        assert!(estimate.std_error < estimate.price * 0.1);
    }

    #[test]
    fn test_put_call_parity_within_noise() {
        let params = OptionParameters::new(100.0, 95.0, 0.03, 0.25, 0.5, 400_000).unwrap();
        let call = pricer(4).estimate(&params, OptionType::Call).unwrap();
        let put = pricer(4).estimate(&params, OptionType::Put).unwrap();
        let forward = 100.0 - 95.0 * params.discount_factor();
        let tolerance = 5.0 * (call.std_error.powi(2) + put.std_error.powi(2)).sqrt();
        assert!((call.price - put.price - forward).abs() < tolerance);
    }

    #[test]
    fn test_deep_otm_call_is_worthless() {
        let params = OptionParameters::new(10.0, 1_000.0, 0.0, 0.1, 0.25, 10_000).unwrap();
        let estimate = pricer(2).estimate(&params, OptionType::Call).unwrap();
        assert_eq!(estimate.price, 0.0);
        assert_eq!(estimate.std_error, 0.0);
    }

    #[test]
    fn test_pricer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonteCarloPricer>();
    }

    #[test]
    fn test_pricer_reports_sampling_noise() {
        assert!(pricer(1).is_noisy());
    }
}
