//! # ci-coverage
//!
//! Demonstrate confidence-interval coverage by repeated sampling.
//!
//! The estimator draws `n_samples` independent samples of size
//! `sample_size` from a normal population with known mean and standard
//! deviation. For each sample it builds the interval
//!
//! ```text
//! x̄ ± z · s / √n        z = Φ⁻¹(1 - α/2),  α = 1 - confidence
//! ```
//!
//! using the unbiased (n-1) standard deviation `s`, and counts how many
//! intervals fail to contain the true mean. Over many runs the miss rate
//! settles near `α`.
//!
//! ## Quick Start
//!
//! ```
//! use ci_coverage::{output, CoverageEstimator};
//!
//! let report = CoverageEstimator::new().seed(7).run();
//! print!("{}", output::format_summary(&report));
//! assert!(report.intervals.iter().all(|ci| ci.lower <= ci.upper));
//! ```
//!
//! The `ci-coverage` binary wraps the same estimator, prints the summary and
//! writes an SVG chart of the intervals.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod estimator;
mod result;
mod types;

// Functional modules
pub mod constants;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, ConfigError};
pub use estimator::CoverageEstimator;
pub use result::{CoverageReport, RepeatedCoverage};
pub use types::{ConfidenceInterval, Coverage};
