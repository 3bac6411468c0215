//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{CoverageReport, RepeatedCoverage};

/// Format the two-line coverage summary.
///
/// ```text
/// Out of 40 intervals, 2 did NOT contain the true mean.
/// This is roughly 5.0%, close to the expected 5% for a 95% CI.
/// ```
pub fn format_summary(report: &CoverageReport) -> String {
    let confidence = report.config.confidence;
    format!(
        "Out of {} intervals, {} did NOT contain the true mean.\n\
         This is roughly {:.1}%, close to the expected {:.0}% for a {:.0}% CI.\n",
        report.n_intervals(),
        report.misses,
        report.miss_rate() * 100.0,
        report.expected_miss_rate() * 100.0,
        confidence * 100.0
    )
}

/// Format a CoverageReport for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. The miss rate is green when it
/// is within two binomial standard errors of the expected rate, yellow
/// otherwise.
pub fn format_report(report: &CoverageReport) -> String {
    let config = &report.config;
    let mut output = String::new();

    let header = format!(
        "{:.0}% Confidence Intervals for Sample Means",
        config.confidence * 100.0
    )
    .bold()
    .to_string();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!(
        "Population: N({}, {}\u{00B2})",
        config.true_mean, config.true_std
    )));
    output.push_str(&format_box_line(&format!(
        "Samples: {} of size {}",
        config.n_samples, config.sample_size
    )));
    output.push_str(&format_box_line(&format!(
        "Critical value: z = {:.5}",
        report.z
    )));
    output.push_str(&format_box_line(&format!("Seed: {}", report.seed)));

    output.push_str(&format_box_separator());

    let missed = format!("Missed intervals: {}/{}", report.misses, report.n_intervals());
    let missed_colored = if report.misses == 0 {
        missed.green()
    } else {
        missed.red()
    };
    output.push_str(&format_box_line(&missed_colored.to_string()));

    let rate = format!(
        "Observed miss rate: {:.1}%",
        report.miss_rate() * 100.0
    );
    let rate_colored = if within_two_se(
        report.miss_rate(),
        report.expected_miss_rate(),
        report.n_intervals(),
    ) {
        rate.green()
    } else {
        rate.yellow()
    };
    output.push_str(&format_box_line(&rate_colored.to_string()));
    output.push_str(&format_box_line(&format!(
        "Expected miss rate: {:.1}%",
        report.expected_miss_rate() * 100.0
    )));

    output.push_str(&format_box_bottom());
    output
}

/// Format pooled results of repeated runs.
pub fn format_repeated(repeated: &RepeatedCoverage) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(
        &format!("Repeated coverage: {} runs", repeated.runs())
            .bold()
            .to_string(),
    ));
    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&format!(
        "Intervals: {} ({} per run)",
        repeated.total_intervals(),
        repeated.config.n_samples
    )));
    output.push_str(&format_box_line(&format!(
        "Total misses: {}",
        repeated.total_misses()
    )));

    let rate = format!(
        "Pooled miss rate: {:.2}%",
        repeated.pooled_miss_rate() * 100.0
    );
    let rate_colored = if within_two_se(
        repeated.pooled_miss_rate(),
        repeated.expected_miss_rate(),
        repeated.total_intervals(),
    ) {
        rate.green()
    } else {
        rate.yellow()
    };
    output.push_str(&format_box_line(&rate_colored.to_string()));
    output.push_str(&format_box_line(&format!(
        "Expected miss rate: {:.2}%",
        repeated.expected_miss_rate() * 100.0
    )));
    output.push_str(&format_box_bottom());
    output
}

/// Whether `observed` is within two binomial standard errors of `expected`.
fn within_two_se(observed: f64, expected: f64, n: usize) -> bool {
    if n == 0 {
        return true;
    }
    let se = (expected * (1.0 - expected) / n as f64).sqrt();
    (observed - expected).abs() <= 2.0 * se
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::ConfidenceInterval;

    fn make_report(misses: usize, n: usize) -> CoverageReport {
        let interval = ConfidenceInterval {
            lower: 63.0,
            upper: 65.0,
            sample_mean: 64.0,
        };
        CoverageReport {
            config: Config {
                n_samples: n,
                ..Config::default()
            },
            seed: 42,
            z: 1.959964,
            intervals: vec![interval; n],
            misses,
        }
    }

    #[test]
    fn test_summary_lines() {
        let output = format_summary(&make_report(2, 40));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Out of 40 intervals, 2 did NOT contain the true mean."
        );
        assert_eq!(
            lines[1],
            "This is roughly 5.0%, close to the expected 5% for a 95% CI."
        );
    }

    #[test]
    fn test_summary_one_decimal() {
        let output = format_summary(&make_report(1, 3));
        assert!(output.contains("roughly 33.3%"));
    }

    #[test]
    fn test_format_report() {
        let output = format_report(&make_report(3, 40));
        assert!(output.contains("95% Confidence Intervals for Sample Means"));
        assert!(output.contains("Missed intervals: 3/40"));
        assert!(output.contains("Observed miss rate: 7.5%"));
        assert!(output.contains("Expected miss rate: 5.0%"));
        assert!(output.contains("Seed: 42"));
    }

    #[test]
    fn test_format_repeated() {
        let repeated = RepeatedCoverage {
            config: Config::default(),
            base_seed: 0,
            misses_per_run: vec![2, 2, 2],
        };
        let output = format_repeated(&repeated);
        assert!(output.contains("Repeated coverage: 3 runs"));
        assert!(output.contains("Intervals: 120 (40 per run)"));
        assert!(output.contains("Total misses: 6"));
        assert!(output.contains("Pooled miss rate: 5.00%"));
    }

    #[test]
    fn test_within_two_se() {
        // n = 400, p = 0.05: se ≈ 0.0109
        assert!(within_two_se(0.06, 0.05, 400));
        assert!(!within_two_se(0.10, 0.05, 400));
        assert!(within_two_se(0.5, 0.05, 0));
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
