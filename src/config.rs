//! Run configuration for the coverage demonstration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_CONFIDENCE, DEFAULT_N_SAMPLES, DEFAULT_SAMPLE_SIZE, DEFAULT_TRUE_MEAN,
    DEFAULT_TRUE_STD,
};

/// Parameters of a single coverage run.
///
/// All fields are fixed for the duration of a run. Use [`Config::validate`]
/// before handing a hand-built config to the estimator; the
/// [`CoverageEstimator`](crate::CoverageEstimator) builder does it for you.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of independent samples, and therefore intervals.
    ///
    /// Default: 40.
    pub n_samples: usize,

    /// Observations per sample.
    ///
    /// Must be at least 2 so the n-1 standard deviation is defined.
    /// Default: 30.
    pub sample_size: usize,

    /// Mean of the population being sampled. Default: 64.0.
    pub true_mean: f64,

    /// Standard deviation of the population being sampled. Default: 3.098386.
    pub true_std: f64,

    /// Two-sided confidence level in (0, 1). Default: 0.95.
    pub confidence: f64,

    /// Optional deterministic seed.
    ///
    /// When set, every run with the same config produces identical intervals.
    /// Default: None (seeded from the OS).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_N_SAMPLES,
            sample_size: DEFAULT_SAMPLE_SIZE,
            true_mean: DEFAULT_TRUE_MEAN,
            true_std: DEFAULT_TRUE_STD,
            confidence: DEFAULT_CONFIDENCE,
            seed: None,
        }
    }
}

/// A parameter that cannot produce a meaningful run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No samples requested.
    #[error("n_samples must be > 0")]
    NoSamples,

    /// Sample too small for an n-1 standard deviation.
    #[error("sample_size must be >= 2 (got {0})")]
    SampleTooSmall(usize),

    /// Population mean is NaN or infinite.
    #[error("true_mean must be finite (got {0})")]
    NonFiniteMean(f64),

    /// Population standard deviation is not a positive finite number.
    #[error("true_std must be positive and finite (got {0})")]
    InvalidStdDev(f64),

    /// Confidence level outside the open unit interval.
    #[error("confidence must be in (0, 1) (got {0})")]
    InvalidConfidence(f64),
}

impl Config {
    /// Create a configuration with the classroom defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classroom exercise: 40 intervals from samples of 30.
    pub fn classroom() -> Self {
        Self::default()
    }

    /// Enough intervals that the observed miss rate sits close to `1 - confidence`.
    pub fn large() -> Self {
        Self {
            n_samples: 1_000,
            ..Self::default()
        }
    }

    /// Significance level `α = 1 - confidence`, the expected miss rate.
    pub fn alpha(&self) -> f64 {
        1.0 - self.confidence
    }

    /// Check every parameter, returning the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.sample_size < 2 {
            return Err(ConfigError::SampleTooSmall(self.sample_size));
        }
        if !self.true_mean.is_finite() {
            return Err(ConfigError::NonFiniteMean(self.true_mean));
        }
        if !(self.true_std.is_finite() && self.true_std > 0.0) {
            return Err(ConfigError::InvalidStdDev(self.true_std));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(ConfigError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}
