//! Interval records produced by the estimator.

use serde::{Deserialize, Serialize};

use crate::statistics::{mean, standard_error};

/// A two-sided confidence interval for the mean of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound, `mean - z·SE`.
    pub lower: f64,
    /// Upper bound, `mean + z·SE`.
    pub upper: f64,
    /// Sample mean the interval is centred on.
    pub sample_mean: f64,
}

impl ConfidenceInterval {
    /// Build the interval `mean ± z·SE` for one sample.
    ///
    /// # Panics
    ///
    /// Panics if `sample` has fewer than two observations.
    pub fn from_sample(sample: &[f64], z: f64) -> Self {
        let sample_mean = mean(sample);
        let margin = z * standard_error(sample);
        Self {
            lower: sample_mean - margin,
            upper: sample_mean + margin,
            sample_mean,
        }
    }

    /// Whether `value` lies in the closed interval `[lower, upper]`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Centre of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Distance between the bounds.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Whether an interval captured the true mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// The true mean lies inside the interval.
    Hit,
    /// The true mean lies outside the interval.
    Miss,
}

impl Coverage {
    /// Classify `interval` against `true_mean`.
    pub fn of(interval: &ConfidenceInterval, true_mean: f64) -> Self {
        if interval.contains(true_mean) {
            Coverage::Hit
        } else {
            Coverage::Miss
        }
    }
}
