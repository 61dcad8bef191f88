//! # Random Number Generation
//!
//! Random engines for the Monte Carlo simulator.
//!
//! ## Design Rationale
//!
//! - **Independence**: every simulation worker owns its own engine, seeded
//!   from the operating system's entropy source, so no two workers (and no
//!   two runs) share a stream
//! - **Exclusivity**: [`EnginePool`] hands out `&mut` access, so two workers
//!   using the same engine concurrently is rejected at compile time
//! - **Efficiency**: batch fills into caller-owned `&mut [f64]` buffers
//!
//! Reproducibility is not a goal of the production path. Fixed seeds
//! ([`PricerRng::from_seed`]) exist for deterministic unit tests.
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper
//! - [`pool`]: Per-worker engine pool
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::EnginePool;
//!
//! let mut pool = EnginePool::new(4);
//! assert_eq!(pool.len(), 4);
//!
//! let z = pool.engine_for(2).gen_normal();
//! assert!(z.is_finite());
//! ```

pub mod pool;
pub mod prng;

// Public re-exports
pub use pool::EnginePool;
pub use prng::PricerRng;
