//! End-to-end checks of the terminal, JSON and chart output for real runs.

use ci_coverage::output::{
    format_repeated, format_report, format_summary, render_chart, to_json, PlotError,
};
use ci_coverage::CoverageEstimator;

#[test]
fn summary_reports_misses_and_percentage() {
    let report = CoverageEstimator::new().seed(10).run();
    let summary = format_summary(&report);

    assert!(summary.starts_with(&format!(
        "Out of 40 intervals, {} did NOT contain the true mean.\n",
        report.misses
    )));
    assert!(summary.contains(&format!(
        "This is roughly {:.1}%, close to the expected 5% for a 95% CI.",
        report.misses as f64 / 40.0 * 100.0
    )));
}

#[test]
fn summary_at_99_percent() {
    let report = CoverageEstimator::new().confidence(0.99).seed(10).run();
    assert!(format_summary(&report).contains("close to the expected 1% for a 99% CI."));
}

#[test]
fn boxed_report_mentions_parameters() {
    let report = CoverageEstimator::new().samples(12).sample_size(25).seed(3).run();
    let text = format_report(&report);
    assert!(text.contains("Samples: 12 of size 25"));
    assert!(text.contains(&format!("Missed intervals: {}/12", report.misses)));
    assert!(text.contains("Seed: 3"));
}

#[test]
fn repeated_report_totals() {
    let repeated = CoverageEstimator::new().samples(10).seed(1).run_repeated(5);
    let text = format_repeated(&repeated);
    assert!(text.contains("Intervals: 50 (10 per run)"));
    assert!(text.contains(&format!("Total misses: {}", repeated.total_misses())));
}

#[test]
fn json_has_one_entry_per_interval() {
    let report = CoverageEstimator::new().samples(7).seed(4).run();
    let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
    assert_eq!(value["intervals"].as_array().unwrap().len(), 7);
    assert_eq!(value["misses"], report.misses);
    assert_eq!(value["config"]["confidence"], 0.95);
}

#[test]
fn chart_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intervals.svg");
    let report = CoverageEstimator::new().seed(6).run();

    render_chart(&report, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(&format!("Missed intervals: {}/40", report.misses)));
}

#[test]
fn chart_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("intervals.svg");
    let report = CoverageEstimator::new().samples(3).seed(6).run();

    let err = render_chart(&report, &path).unwrap_err();
    assert!(matches!(err, PlotError::Draw(_)));
}
