//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Φ(x) = ½(1 + erf(x/√2))
//! - `norm_pdf`: φ(x) = exp(−x²/2) / √(2π)
//!
//! The error function comes from `statrs`, which is accurate to machine
//! precision; the closed-form Greeks and the finite-difference checks against
//! them rely on that accuracy.

use statrs::function::erf::erf;

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// assert!((norm_pdf(1.0) - 0.2419707245).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_bounds_and_monotonic() {
        let xs: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for w in xs.windows(2) {
            let (a, b) = (norm_cdf(w[0]), norm_cdf(w[1]));
            assert!((0.0..=1.0).contains(&a));
            assert!(b >= a, "CDF not monotonic at x = {}", w[0]);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert_eq!(norm_cdf(40.0), 1.0);
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(-8.0) < 1e-14);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
        assert_relative_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-3.0), 0.004431848411938008, epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_derivative_is_pdf() {
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-9);
        }
    }
}
