//! Parallel reduction simulator.
//!
//! Splits `total_samples` draws into one contiguous slice per worker, runs
//! every slice on a freshly built thread pool, joins, then combines the
//! per-worker partial sums on the calling thread.
//!
//! # Concurrency
//!
//! - Each worker owns one [`PricerRng`] and one [`SimulationAccumulator`]
//!   slot; the only state shared between workers is the read-only payoff
//! - Partials are combined strictly after the join, so no lock appears in
//!   the hot loop
//! - The thread pool lives for exactly one call and is dropped before
//!   returning

use std::time::Instant;

use pricer_core::types::PricingError;
use rayon::prelude::*;
use wide::f64x4;

use super::config::{ExecutionStrategy, SimulationConfig};
use super::payoff::SamplePayoff;
use crate::rng::{EnginePool, PricerRng};

/// Running sum, sum of squares and count of payoff samples.
///
/// One accumulator is owned by each worker for the duration of its slice.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationAccumulator;
///
/// let mut acc = SimulationAccumulator::default();
/// for x in [1.0, 2.0, 3.0] {
///     acc.add(x);
/// }
/// assert_eq!(acc.sum(), 6.0);
/// assert_eq!(acc.mean(), 2.0);
/// assert_eq!(acc.variance(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationAccumulator {
    sum: f64,
    sum_sq: f64,
    count: u64,
}

impl SimulationAccumulator {
    /// Adds one sample.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.sum_sq += value * value;
        self.count += 1;
    }

    /// Combines another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &SimulationAccumulator) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    /// Sum of samples.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of squared samples.
    #[inline]
    pub fn sum_sq(&self) -> f64 {
        self.sum_sq
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean, or zero when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Unbiased sample variance, or zero with fewer than two samples.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        // Clamp tiny negatives from cancellation.
        ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
    }

    /// Standard error of the mean.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as f64).sqrt()
        }
    }
}

/// Number of samples assigned to `worker` when `total` is split across
/// `workers` contiguous slices. The last slice absorbs the remainder.
#[inline]
pub fn slice_len(total: u64, workers: usize, worker: usize) -> u64 {
    let workers_u64 = workers as u64;
    let base = total / workers_u64;
    if worker + 1 == workers {
        base + total % workers_u64
    } else {
        base
    }
}

/// Runs payoff reductions across a per-call pool of worker threads.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ParallelSimulator, SimulationConfig};
/// use pricer_pricing::rng::EnginePool;
///
/// let config = SimulationConfig::builder().workers(2).build().unwrap();
/// let simulator = ParallelSimulator::new(config);
/// let mut engines = EnginePool::new(2);
///
/// // E[Z²] = 1
/// let acc = simulator.run(&mut engines, &|z: f64| z * z, 100_000).unwrap();
/// assert_eq!(acc.count(), 100_000);
/// assert!((acc.mean() - 1.0).abs() < 0.05);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelSimulator {
    config: SimulationConfig,
}

impl ParallelSimulator {
    /// Creates a simulator with the given configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sums `payoff(Z)` over `total_samples` standard normal draws.
    ///
    /// Blocks until every worker has finished. `engines` must hold at least
    /// as many engines as configured workers.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidConfig` if the engine pool is too small
    /// - `PricingError::WorkerPool` if worker threads cannot be created
    pub fn run<P>(
        &self,
        engines: &mut EnginePool,
        payoff: &P,
        total_samples: u64,
    ) -> Result<SimulationAccumulator, PricingError>
    where
        P: SamplePayoff + ?Sized,
    {
        let workers = self.config.workers();
        if engines.len() < workers {
            return Err(PricingError::InvalidConfig(format!(
                "engine pool holds {} engines but {} workers are configured",
                engines.len(),
                workers
            )));
        }
        let strategy = self.config.strategy().resolve();
        let started = Instant::now();

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("mc-worker-{index}"))
            .build()
            .map_err(|e| PricingError::WorkerPool(e.to_string()))?;

        let mut partials = vec![SimulationAccumulator::default(); workers];
        let worker_engines = &mut engines.engines_mut()[..workers];

        thread_pool.install(|| {
            partials
                .par_iter_mut()
                .zip(worker_engines.par_iter_mut())
                .enumerate()
                .for_each(|(worker, (partial, rng))| {
                    let samples = slice_len(total_samples, workers, worker);
                    *partial = run_slice(payoff, rng, samples, strategy);
                    tracing::trace!(worker, samples, "worker slice complete");
                });
        });
        drop(thread_pool);

        let mut total = SimulationAccumulator::default();
        for partial in &partials {
            total.merge(partial);
        }

        tracing::debug!(
            workers,
            samples = total_samples,
            %strategy,
            elapsed_us = started.elapsed().as_micros() as u64,
            "simulation complete"
        );
        Ok(total)
    }
}

/// Evaluates one worker's slice on the calling thread.
fn run_slice<P>(
    payoff: &P,
    rng: &mut PricerRng,
    samples: u64,
    strategy: ExecutionStrategy,
) -> SimulationAccumulator
where
    P: SamplePayoff + ?Sized,
{
    match strategy {
        ExecutionStrategy::Vectorized => run_slice_x4(payoff, rng, samples),
        ExecutionStrategy::Scalar | ExecutionStrategy::Auto => {
            let mut acc = SimulationAccumulator::default();
            for _ in 0..samples {
                acc.add(payoff.evaluate(rng.gen_normal()));
            }
            acc
        }
    }
}

/// Four draws per iteration; the tail (< 4) goes through the scalar path.
fn run_slice_x4<P>(payoff: &P, rng: &mut PricerRng, samples: u64) -> SimulationAccumulator
where
    P: SamplePayoff + ?Sized,
{
    let mut lane_sum = f64x4::splat(0.0);
    let mut lane_sum_sq = f64x4::splat(0.0);

    for _ in 0..samples / 4 {
        let values = payoff.evaluate_x4(f64x4::from(rng.gen_normal_x4()));
        lane_sum += values;
        lane_sum_sq = values.mul_add(values, lane_sum_sq);
    }

    let mut acc = SimulationAccumulator {
        sum: lane_sum.reduce_add(),
        sum_sq: lane_sum_sq.reduce_add(),
        count: samples - samples % 4,
    };
    for _ in 0..samples % 4 {
        acc.add(payoff.evaluate(rng.gen_normal()));
    }
    acc
}
