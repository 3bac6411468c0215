//! Two-tailed critical values of the standard normal distribution.

use statrs::distribution::{ContinuousCDF, Normal};

/// Critical value `z` such that `P(-z ≤ Z ≤ z) = confidence` for `Z ~ N(0, 1)`.
///
/// Computed as `Φ⁻¹(1 - α/2)` with `α = 1 - confidence`.
///
/// # Examples
/// ```
/// use ci_coverage::statistics::z_critical;
/// assert!((z_critical(0.95) - 1.959964).abs() < 1e-5);
/// ```
///
/// # Panics
///
/// Panics if `confidence` is not in (0, 1).
pub fn z_critical(confidence: f64) -> f64 {
    assert!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be in (0, 1)"
    );

    let alpha = 1.0 - confidence;
    let standard = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    standard.inverse_cdf(1.0 - alpha / 2.0)
}
