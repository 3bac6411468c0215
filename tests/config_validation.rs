//! Tests for configuration validation.
//!
//! These tests verify that invalid parameters are rejected, either by the
//! builder methods with a panic message or by `Config::validate`.

use ci_coverage::{Config, ConfigError, CoverageEstimator};

// =============================================================================
// SAMPLE COUNT VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "n_samples must be > 0")]
fn samples_zero_panics() {
    let _ = CoverageEstimator::new().samples(0);
}

#[test]
fn samples_one_valid() {
    let estimator = CoverageEstimator::new().samples(1);
    assert_eq!(estimator.config().n_samples, 1);
}

#[test]
fn samples_large_valid() {
    let estimator = CoverageEstimator::new().samples(100_000);
    assert_eq!(estimator.config().n_samples, 100_000);
}

// =============================================================================
// SAMPLE SIZE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "sample_size must be >= 2")]
fn sample_size_zero_panics() {
    let _ = CoverageEstimator::new().sample_size(0);
}

#[test]
#[should_panic(expected = "sample_size must be >= 2")]
fn sample_size_one_panics() {
    // A single observation has no n-1 standard deviation
    let _ = CoverageEstimator::new().sample_size(1);
}

#[test]
fn sample_size_two_valid() {
    let estimator = CoverageEstimator::new().sample_size(2);
    assert_eq!(estimator.config().sample_size, 2);
}

// =============================================================================
// POPULATION PARAMETERS
// =============================================================================

#[test]
#[should_panic(expected = "true_mean must be finite")]
fn true_mean_nan_panics() {
    let _ = CoverageEstimator::new().true_mean(f64::NAN);
}

#[test]
#[should_panic(expected = "true_mean must be finite")]
fn true_mean_infinite_panics() {
    let _ = CoverageEstimator::new().true_mean(f64::INFINITY);
}

#[test]
fn true_mean_negative_valid() {
    let estimator = CoverageEstimator::new().true_mean(-12.5);
    assert_eq!(estimator.config().true_mean, -12.5);
}

#[test]
#[should_panic(expected = "true_std must be positive and finite")]
fn true_std_zero_panics() {
    let _ = CoverageEstimator::new().true_std(0.0);
}

#[test]
#[should_panic(expected = "true_std must be positive and finite")]
fn true_std_negative_panics() {
    let _ = CoverageEstimator::new().true_std(-1.0);
}

#[test]
#[should_panic(expected = "true_std must be positive and finite")]
fn true_std_nan_panics() {
    let _ = CoverageEstimator::new().true_std(f64::NAN);
}

// =============================================================================
// CONFIDENCE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "confidence must be in (0, 1)")]
fn confidence_zero_panics() {
    let _ = CoverageEstimator::new().confidence(0.0);
}

#[test]
#[should_panic(expected = "confidence must be in (0, 1)")]
fn confidence_one_panics() {
    let _ = CoverageEstimator::new().confidence(1.0);
}

#[test]
#[should_panic(expected = "confidence must be in (0, 1)")]
fn confidence_greater_than_one_panics() {
    let _ = CoverageEstimator::new().confidence(95.0);
}

#[test]
#[should_panic(expected = "confidence must be in (0, 1)")]
fn confidence_nan_panics() {
    let _ = CoverageEstimator::new().confidence(f64::NAN);
}

#[test]
fn confidence_common_values_valid() {
    for c in [0.8, 0.9, 0.95, 0.99, 0.999] {
        let estimator = CoverageEstimator::new().confidence(c);
        assert_eq!(estimator.config().confidence, c);
    }
}

// =============================================================================
// Config::validate / from_config
// =============================================================================

#[test]
fn from_config_accepts_defaults() {
    assert!(CoverageEstimator::from_config(Config::default()).is_ok());
}

#[test]
fn from_config_reports_first_invalid_field() {
    let config = Config {
        n_samples: 0,
        confidence: 2.0,
        ..Config::default()
    };
    assert_eq!(
        CoverageEstimator::from_config(config).unwrap_err(),
        ConfigError::NoSamples
    );
}

#[test]
fn from_config_rejects_bad_std() {
    let config = Config {
        true_std: f64::INFINITY,
        ..Config::default()
    };
    assert!(matches!(
        CoverageEstimator::from_config(config),
        Err(ConfigError::InvalidStdDev(_))
    ));
}

#[test]
fn from_config_rejects_small_sample() {
    let config = Config {
        sample_size: 1,
        ..Config::default()
    };
    assert_eq!(
        CoverageEstimator::from_config(config).unwrap_err(),
        ConfigError::SampleTooSmall(1)
    );
}
