//! Sample moments.
//!
//! The standard deviation uses Bessel's correction (denominator `n - 1`), so
//! the standard error `s / √n` is the usual unbiased-variance estimate of the
//! spread of the sample mean.

/// Arithmetic mean of a sample.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation with denominator `n - 1`.
///
/// Two-pass: the mean is computed first and the squared deviations summed
/// around it, which avoids the cancellation of the `Σx² - n·x̄²` form when
/// the mean is large relative to the spread.
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    assert!(
        data.len() >= 2,
        "Sample standard deviation needs at least 2 observations"
    );

    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    (ss / (data.len() - 1) as f64).sqrt()
}

/// Estimated standard error of the mean, `s / √n`.
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn standard_error(data: &[f64]) -> f64 {
    sample_std_dev(data) / (data.len() as f64).sqrt()
}
