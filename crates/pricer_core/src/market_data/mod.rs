//! Market data structures for option pricing.
//!
//! # Components
//!
//! - [`surfaces`]: Volatility surface trait, the parametric smile surface and
//!   its sampled grid
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::surfaces::{SmileVolSurface, VolatilitySurface};
//!
//! // Smile anchored at spot 100, maturity 1y, base vol 20%
//! let surface = SmileVolSurface::<f64>::new(100.0, 1.0, 0.2).unwrap();
//! let atm = surface.volatility(100.0, 1.0).unwrap();
//! assert!((atm - 0.2).abs() < 1e-12);
//! ```

pub mod error;
pub mod surfaces;

// Re-export commonly used types
pub use error::MarketDataError;
pub use surfaces::{SmileVolSurface, VolSurfaceGrid, VolatilitySurface};
