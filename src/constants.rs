//! Default run parameters.
//!
//! The defaults reproduce the classroom exercise: forty samples of thirty
//! observations each, drawn from a population with mean 64 and standard
//! deviation 3.098386, with 95% intervals.

/// Default number of independent samples (one interval per sample).
pub const DEFAULT_N_SAMPLES: usize = 40;

/// Default number of observations per sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Default population mean.
pub const DEFAULT_TRUE_MEAN: f64 = 64.0;

/// Default population standard deviation.
pub const DEFAULT_TRUE_STD: f64 = 3.098386;

/// Default two-sided confidence level.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Below this sample size the normal critical value noticeably undercovers.
pub const SMALL_SAMPLE_WARNING: usize = 10;

/// Environment variable consulted for a fixed RNG seed.
pub const SEED_ENV_VAR: &str = "CI_COVERAGE_SEED";

/// Default chart file written by the CLI.
pub const DEFAULT_CHART_PATH: &str = "ci_coverage.svg";
