//! Safe parsing for a provider that ships every number as a string.
//!
//! Parsing never fails: a missing or malformed field becomes 0. That policy
//! is a display decision, not an oversight; the UI shows a zeroed metric
//! rather than refusing the whole quote.

use chrono::{Datelike, NaiveDate};

/// Parse a decimal field, defaulting to 0 when missing or malformed.
pub(crate) fn parse_f64_or_zero(field: Option<&str>) -> f64 {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse an integer field, defaulting to 0 when missing or malformed.
pub(crate) fn parse_i64_or_zero(field: Option<&str>) -> i64 {
    field.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Like [`parse_f64_or_zero`], but strips one trailing `%` first.
pub(crate) fn parse_percent_or_zero(field: Option<&str>) -> f64 {
    field
        .map(|s| {
            let s = s.trim();
            s.strip_suffix('%').unwrap_or(s)
        })
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// `"Q<n> <year>"` for a `%Y-%m-%d` period-end date. Quarters run Jan-Mar,
/// Apr-Jun, Jul-Sep, Oct-Dec.
///
/// A date that does not parse yields `"Q? ????"`; the raw string still
/// travels alongside the label in [`crate::CashFlowPeriod`].
pub(crate) fn fiscal_period_label(fiscal_date_ending: &str) -> String {
    match NaiveDate::parse_from_str(fiscal_date_ending, "%Y-%m-%d") {
        Ok(date) => {
            let quarter = (date.month() + 2) / 3;
            format!("Q{quarter} {}", date.year())
        }
        Err(_) => "Q? ????".to_string(),
    }
}
