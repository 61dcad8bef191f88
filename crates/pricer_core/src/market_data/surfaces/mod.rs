//! Volatility surface abstractions.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Generic trait for implied volatility lookup
//! - [`SmileVolSurface`]: Parametric smile with square-root term structure
//! - [`VolSurfaceGrid`]: A surface sampled on a strike × maturity grid

mod grid;
mod smile;
mod traits;

pub use grid::{linspace, VolSurfaceGrid, DEFAULT_GRID_POINTS};
pub use smile::{SmileVolSurface, DEFAULT_SMILE_CURVATURE};
pub use traits::VolatilitySurface;
