//! Volatility surface sampled on a rectangular grid.

use super::smile::SmileVolSurface;
use super::traits::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::types::OptionParameters;

/// Points per axis of the standard grid.
pub const DEFAULT_GRID_POINTS: usize = 20;

/// Strike range of the standard grid, as multiples of the strike.
const STRIKE_RANGE: (f64, f64) = (0.7, 1.3);

/// Maturity range of the standard grid, as multiples of the maturity.
const MATURITY_RANGE: (f64, f64) = (0.5, 1.5);

/// `points` evenly spaced values from `start` to `end` inclusive.
///
/// # Errors
///
/// `InsufficientData` for fewer than two points, `InvalidRange` when the range
/// is not finite or `start > end`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::linspace;
///
/// let xs = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, points: usize) -> Result<Vec<f64>, MarketDataError> {
    if points < 2 {
        return Err(MarketDataError::InsufficientData {
            got: points,
            need: 2,
        });
    }
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(MarketDataError::InvalidRange {
            min: start,
            max: end,
        });
    }

    let step = (end - start) / (points - 1) as f64;
    let mut values: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
    // pin the last node so it is exactly `end`
    values[points - 1] = end;
    Ok(values)
}

/// Implied volatilities sampled on a strike × maturity grid.
///
/// `vols[i][j]` is σ(strikes[i], maturities[j]).
#[derive(Debug, Clone, PartialEq)]
pub struct VolSurfaceGrid {
    strikes: Vec<f64>,
    maturities: Vec<f64>,
    vols: Vec<Vec<f64>>,
}

impl VolSurfaceGrid {
    /// Samples any surface on the given axes.
    pub fn sample<S: VolatilitySurface<f64> + ?Sized>(
        surface: &S,
        strikes: Vec<f64>,
        maturities: Vec<f64>,
    ) -> Result<Self, MarketDataError> {
        let vols = strikes
            .iter()
            .map(|&k| {
                maturities
                    .iter()
                    .map(|&t| surface.volatility(k, t))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            strikes,
            maturities,
            vols,
        })
    }

    /// The standard smile grid around a pricing request: strikes over
    /// [0.7K, 1.3K], maturities over [0.5T, 1.5T], `points` nodes per axis.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::VolSurfaceGrid;
    /// use pricer_core::types::OptionParameters;
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1).unwrap();
    /// let grid = VolSurfaceGrid::around(&params, 20).unwrap();
    /// assert_eq!(grid.strikes().len(), 20);
    /// assert_eq!(grid.maturities().len(), 20);
    /// assert!((grid.strikes()[0] - 70.0).abs() < 1e-12);
    /// ```
    pub fn around(params: &OptionParameters, points: usize) -> Result<Self, MarketDataError> {
        let surface = SmileVolSurface::from_parameters(params)?;
        let strikes = linspace(
            params.strike() * STRIKE_RANGE.0,
            params.strike() * STRIKE_RANGE.1,
            points,
        )?;
        let maturities = linspace(
            params.maturity() * MATURITY_RANGE.0,
            params.maturity() * MATURITY_RANGE.1,
            points,
        )?;
        Self::sample(&surface, strikes, maturities)
    }

    /// Strike axis.
    #[inline]
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Maturity axis.
    #[inline]
    pub fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    /// Volatility rows, one per strike.
    #[inline]
    pub fn vols(&self) -> &[Vec<f64>] {
        &self.vols
    }

    /// Volatility at grid node (i, j).
    #[inline]
    pub fn get(&self, strike_index: usize, maturity_index: usize) -> Option<f64> {
        self.vols.get(strike_index)?.get(maturity_index).copied()
    }

    /// Smallest and largest volatility on the grid.
    pub fn vol_range(&self) -> (f64, f64) {
        self.vols
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
