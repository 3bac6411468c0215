//! Statistical building blocks for interval estimation.
//!
//! This module provides:
//! - Sample moments: mean, unbiased standard deviation, standard error
//! - Two-tailed normal critical values for a confidence level

mod critical;
mod moments;

pub use critical::z_critical;
pub use moments::{mean, sample_std_dev, standard_error};
