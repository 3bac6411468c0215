//! JSON serialization for coverage reports.

use serde::Serialize;

/// Serialize a report to a compact JSON string.
///
/// Works for both [`CoverageReport`](crate::CoverageReport) and
/// [`RepeatedCoverage`](crate::RepeatedCoverage).
///
/// # Errors
///
/// Returns an error if serialization fails (non-finite floats serialize as
/// `null`, so this should not happen for reports).
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
