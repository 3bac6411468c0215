//! SVG chart of every interval against the true mean.
//!
//! Each interval is a horizontal segment at its sample index with a dot at
//! the sample mean; blue segments contain the true mean, red ones miss it.
//! A magenta vertical line marks the true mean.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::result::CoverageReport;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Failure while rendering the chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend rejected an operation (e.g. the file could not be written).
    #[error("chart rendering failed: {0}")]
    Draw(String),
}

/// Render the chart for `report` to an SVG file at `path`.
///
/// # Errors
///
/// Returns [`PlotError::Draw`] if the backend fails, typically because the
/// file cannot be created.
pub fn render_chart(report: &CoverageReport, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_intervals(&root, report).map_err(|e| PlotError::Draw(e.to_string()))?;
    debug!(path = %path.display(), "chart written");
    Ok(())
}

/// Render the chart for `report` and return the SVG document.
///
/// # Errors
///
/// Returns [`PlotError::Draw`] if the backend fails.
pub fn render_chart_svg(report: &CoverageReport) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_intervals(&root, report).map_err(|e| PlotError::Draw(e.to_string()))?;
    }
    Ok(svg)
}

fn draw_intervals<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &CoverageReport,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let true_mean = report.config.true_mean;
    let (x_min, x_max) = value_range(report);
    let y_max = report.n_intervals() as f64;

    root.fill(&WHITE)?;
    let title = format!(
        "{:.0}% Confidence Intervals for Sample Means",
        report.config.confidence * 100.0
    );
    let subtitle = format!(
        "Missed intervals: {}/{}",
        report.misses,
        report.n_intervals()
    );
    let area = root
        .titled(&title, ("sans-serif", 20))?
        .titled(&subtitle, ("sans-serif", 16))?;

    let mut chart = ChartBuilder::on(&area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, -1.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Value")
        .y_desc("Sample #")
        .draw()?;

    for (i, ci) in report.intervals.iter().enumerate() {
        let color = if ci.contains(true_mean) { BLUE } else { RED };
        let y = i as f64;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(ci.lower, y), (ci.upper, y)],
            color.stroke_width(2),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(
            (ci.midpoint(), y),
            3,
            color.filled(),
        )))?;
    }

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(true_mean, -1.0), (true_mean, y_max)],
            MAGENTA.stroke_width(3),
        )))?
        .label("True Mean")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA.stroke_width(3)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Horizontal extent covering every bound and the true mean, padded by 5%.
fn value_range(report: &CoverageReport) -> (f64, f64) {
    let true_mean = report.config.true_mean;
    let (lo, hi) = report
        .intervals
        .iter()
        .fold((true_mean, true_mean), |(lo, hi), ci| {
            (lo.min(ci.lower), hi.max(ci.upper))
        });
    let span = hi - lo;
    let pad = if span > 0.0 { 0.05 * span } else { 1.0 };
    (lo - pad, hi + pad)
}
