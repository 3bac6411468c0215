//! Output formatting for coverage reports.
//!
//! This module provides formatters for displaying a `CoverageReport`:
//! - Terminal: the boxed summary plus the two plain coverage lines
//! - JSON: Machine-readable serialization
//! - Plot: SVG chart of every interval against the true mean

mod json;
mod plot;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use plot::{render_chart, render_chart_svg, PlotError};
pub use terminal::{format_repeated, format_report, format_summary};
