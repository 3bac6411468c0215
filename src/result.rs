//! Result types for coverage runs.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::types::{ConfidenceInterval, Coverage};

// ============================================================================
// CoverageReport - one run
// ============================================================================

/// Outcome of one coverage run.
///
/// Intervals are stored in draw order: `intervals[i]` came from the `i`-th
/// sample. The miss counter always satisfies `misses <= intervals.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Parameters the run used.
    pub config: Config,

    /// Seed the generator was initialised with.
    ///
    /// Equal to `config.seed` when one was given, otherwise the seed drawn
    /// from the OS, so any run can be replayed.
    pub seed: u64,

    /// Two-tailed critical value used for every interval.
    pub z: f64,

    /// One interval per sample, in draw order.
    pub intervals: Vec<ConfidenceInterval>,

    /// Number of intervals that exclude the true mean.
    pub misses: usize,
}

impl CoverageReport {
    /// Number of intervals constructed.
    pub fn n_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Number of intervals that contain the true mean.
    pub fn hits(&self) -> usize {
        self.n_intervals() - self.misses
    }

    /// Lower bounds in draw order.
    pub fn lowers(&self) -> Vec<f64> {
        self.intervals.iter().map(|ci| ci.lower).collect()
    }

    /// Upper bounds in draw order.
    pub fn uppers(&self) -> Vec<f64> {
        self.intervals.iter().map(|ci| ci.upper).collect()
    }

    /// Hit/miss classification of each interval, in draw order.
    pub fn coverage(&self) -> impl Iterator<Item = Coverage> + '_ {
        let true_mean = self.config.true_mean;
        self.intervals
            .iter()
            .map(move |ci| Coverage::of(ci, true_mean))
    }

    /// Indices of the intervals that missed the true mean.
    pub fn missed_indices(&self) -> Vec<usize> {
        self.coverage()
            .enumerate()
            .filter(|(_, c)| *c == Coverage::Miss)
            .map(|(i, _)| i)
            .collect()
    }

    /// Observed fraction of intervals that missed, in [0, 1].
    pub fn miss_rate(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.misses as f64 / self.n_intervals() as f64
    }

    /// Observed miss rate as a percentage rounded to one decimal place.
    pub fn miss_percent(&self) -> f64 {
        (self.miss_rate() * 1000.0).round() / 10.0
    }

    /// Theoretical miss rate `1 - confidence`.
    pub fn expected_miss_rate(&self) -> f64 {
        self.config.alpha()
    }
}

// ============================================================================
// RepeatedCoverage - many runs pooled
// ============================================================================

/// Pooled outcome of several independent runs with the same parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatedCoverage {
    /// Parameters shared by every run.
    pub config: Config,

    /// Base seed; run `k` used `base_seed + k`.
    pub base_seed: u64,

    /// Miss count of each run, in run order.
    pub misses_per_run: Vec<usize>,
}

impl RepeatedCoverage {
    /// Number of runs performed.
    pub fn runs(&self) -> usize {
        self.misses_per_run.len()
    }

    /// Total intervals across all runs.
    pub fn total_intervals(&self) -> usize {
        self.runs() * self.config.n_samples
    }

    /// Total misses across all runs.
    pub fn total_misses(&self) -> usize {
        self.misses_per_run.iter().sum()
    }

    /// Pooled miss rate over every interval of every run.
    pub fn pooled_miss_rate(&self) -> f64 {
        let total = self.total_intervals();
        if total == 0 {
            return 0.0;
        }
        self.total_misses() as f64 / total as f64
    }

    /// Theoretical miss rate `1 - confidence`.
    pub fn expected_miss_rate(&self) -> f64 {
        self.config.alpha()
    }
}
