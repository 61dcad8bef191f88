//! Per-worker random engine pool.

use super::prng::PricerRng;

/// A fixed set of independent random engines, one per simulation worker.
///
/// Each engine is seeded from the operating system's entropy source at
/// construction. There is no reseeding API; rebuilding the pool is cheap.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::EnginePool;
///
/// let mut pool = EnginePool::new(2);
/// let (first, rest) = pool.engines_mut().split_at_mut(1);
/// let a = first[0].gen_normal();
/// let b = rest[0].gen_normal();
/// assert!(a.is_finite() && b.is_finite());
/// ```
#[derive(Debug)]
pub struct EnginePool {
    engines: Vec<PricerRng>,
}

impl EnginePool {
    /// Builds `worker_count` entropy-seeded engines.
    ///
    /// A count of zero is treated as one.
    pub fn new(worker_count: usize) -> Self {
        let engines = (0..worker_count.max(1))
            .map(|_| PricerRng::from_entropy())
            .collect();
        Self { engines }
    }

    /// Builds a pool from existing engines. Used by tests that need
    /// deterministic streams.
    pub fn from_engines(engines: Vec<PricerRng>) -> Self {
        if engines.is_empty() {
            return Self::new(1);
        }
        Self { engines }
    }

    /// Number of engines.
    #[inline]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Always false: `new` clamps the count to one and `from_engines`
    /// replaces an empty list with a single engine.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Exclusive access to the engine of worker `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`; an out-of-range worker index is a
    /// caller bug.
    #[inline]
    pub fn engine_for(&mut self, index: usize) -> &mut PricerRng {
        &mut self.engines[index]
    }

    /// All engines as one mutable slice, for handing disjoint engines to
    /// parallel workers.
    #[inline]
    pub fn engines_mut(&mut self) -> &mut [PricerRng] {
        &mut self.engines
    }
}
