//! `CoverageEstimator` entry point and builder.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, trace, warn};

use crate::config::{Config, ConfigError};
use crate::constants::SMALL_SAMPLE_WARNING;
use crate::result::{CoverageReport, RepeatedCoverage};
use crate::statistics::z_critical;
use crate::types::ConfidenceInterval;

/// Draws samples from a known normal population and tallies how many of the
/// resulting confidence intervals miss the true mean.
///
/// Use the builder methods to adjust the parameters, then call
/// [`run`](Self::run).
///
/// # Example
///
/// ```
/// use ci_coverage::CoverageEstimator;
///
/// let report = CoverageEstimator::new()
///     .samples(40)
///     .sample_size(30)
///     .confidence(0.95)
///     .seed(42)
///     .run();
///
/// assert_eq!(report.intervals.len(), 40);
/// assert!(report.misses <= 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoverageEstimator {
    config: Config,
}

impl CoverageEstimator {
    /// Create with the classroom defaults.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from a complete configuration, rejecting invalid parameters.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Set the number of samples (and intervals).
    pub fn samples(mut self, n: usize) -> Self {
        assert!(n > 0, "n_samples must be > 0");
        self.config.n_samples = n;
        self
    }

    /// Set the number of observations per sample.
    pub fn sample_size(mut self, n: usize) -> Self {
        assert!(n >= 2, "sample_size must be >= 2");
        self.config.sample_size = n;
        self
    }

    /// Set the population mean.
    pub fn true_mean(mut self, mean: f64) -> Self {
        assert!(mean.is_finite(), "true_mean must be finite");
        self.config.true_mean = mean;
        self
    }

    /// Set the population standard deviation.
    pub fn true_std(mut self, std: f64) -> Self {
        assert!(
            std.is_finite() && std > 0.0,
            "true_std must be positive and finite"
        );
        self.config.true_std = std;
        self
    }

    /// Set the two-sided confidence level.
    pub fn confidence(mut self, confidence: f64) -> Self {
        assert!(
            confidence > 0.0 && confidence < 1.0,
            "confidence must be in (0, 1)"
        );
        self.config.confidence = confidence;
        self
    }

    /// Fix the RNG seed so runs are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run once with the configured seed, or an OS-drawn one.
    pub fn run(&self) -> CoverageReport {
        let seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut report = self.run_with_rng(&mut rng);
        report.seed = seed;
        report
    }

    /// Run once, drawing every observation from `rng`.
    ///
    /// The returned report's `seed` field is left at `config.seed` (or 0);
    /// callers supplying their own generator know how it was seeded.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> CoverageReport {
        let config = &self.config;
        let z = z_critical(config.confidence);

        debug!(
            n_samples = config.n_samples,
            sample_size = config.sample_size,
            true_mean = config.true_mean,
            true_std = config.true_std,
            confidence = config.confidence,
            z,
            "starting coverage run"
        );
        if config.sample_size < SMALL_SAMPLE_WARNING {
            warn!(
                sample_size = config.sample_size,
                "small samples: normal critical value will undercover"
            );
        }

        let mut intervals = Vec::with_capacity(config.n_samples);
        let mut misses = 0usize;
        let mut sample = vec![0.0; config.sample_size];

        for i in 0..config.n_samples {
            for x in sample.iter_mut() {
                let z_draw: f64 = StandardNormal.sample(rng);
                *x = config.true_mean + config.true_std * z_draw;
            }

            let ci = ConfidenceInterval::from_sample(&sample, z);
            let hit = ci.contains(config.true_mean);
            if !hit {
                misses += 1;
            }
            trace!(index = i, lower = ci.lower, upper = ci.upper, hit, "interval");
            intervals.push(ci);
        }

        info!(
            misses,
            n_samples = config.n_samples,
            "coverage run complete"
        );

        CoverageReport {
            config: config.clone(),
            seed: config.seed.unwrap_or(0),
            z,
            intervals,
            misses,
        }
    }

    /// Perform `runs` independent runs and pool their miss counts.
    ///
    /// Run `k` is seeded with `base_seed + k`, where `base_seed` is the
    /// configured seed or an OS-drawn one.
    pub fn run_repeated(&self, runs: usize) -> RepeatedCoverage {
        assert!(runs > 0, "runs must be > 0");

        let base_seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let misses_per_run: Vec<usize> = (0..runs as u64)
            .map(|k| {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(base_seed.wrapping_add(k));
                self.run_with_rng(&mut rng).misses
            })
            .collect();

        let repeated = RepeatedCoverage {
            config: self.config.clone(),
            base_seed,
            misses_per_run,
        };
        info!(
            runs,
            total_misses = repeated.total_misses(),
            pooled_miss_rate = repeated.pooled_miss_rate(),
            "repeated coverage complete"
        );
        repeated
    }
}
