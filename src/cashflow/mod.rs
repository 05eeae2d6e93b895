//! Quarterly cash flow: the `CASH_FLOW` function plus period normalization.

mod wire;

pub use wire::QuarterlyReport;

use crate::core::conversions::{fiscal_period_label, parse_i64_or_zero};
use crate::core::{AvClient, AvError, CashFlowPeriod, FetchResult};
use wire::CashFlowEnvelope;

const FUNCTION: &str = "CASH_FLOW";

/// Keep at most this many quarters, most recent first as delivered.
const MAX_PERIODS: usize = 4;

/* ---------------- Fetcher ---------------- */

/// Fetch the quarterly cash-flow reports for `symbol`.
///
/// Success always wraps a non-empty list; a present-but-empty
/// `quarterlyReports` classifies as no data so callers never render an
/// empty section. Same no-panic contract as [`crate::quote::fetch_quote`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_cash_flow(
    client: &AvClient,
    symbol: &str,
) -> FetchResult<Vec<QuarterlyReport>> {
    let url = client.query_url(FUNCTION, symbol);

    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|_| AvError::Unexpected("Cash flow data not available".into()))?;

    if !resp.status().is_success() {
        return Err(AvError::Transport("Failed to fetch cash flow data".into()));
    }

    let envelope: CashFlowEnvelope = resp
        .json()
        .await
        .map_err(|_| AvError::Unexpected("Cash flow data not available".into()))?;

    if envelope.error_message.is_some() {
        return Err(AvError::SymbolNotFound(
            "Cash flow data not available for this symbol".into(),
        ));
    }
    if envelope.note.is_some() {
        return Err(AvError::RateLimit(
            "API rate limit reached - please wait a minute".into(),
        ));
    }

    match envelope.quarterly_reports {
        Some(reports) if !reports.is_empty() => Ok(reports),
        _ => Err(AvError::NoData("No cash flow data available".into())),
    }
}

/* ---------------- Transformer ---------------- */

/// Normalize raw quarterly reports into display periods. Pure and
/// infallible; at most [`MAX_PERIODS`] entries, in the given order.
pub fn to_cash_flow_periods(reports: &[QuarterlyReport]) -> Vec<CashFlowPeriod> {
    reports
        .iter()
        .take(MAX_PERIODS)
        .map(|report| {
            let fiscal_date_ending = report.fiscal_date_ending.clone().unwrap_or_default();
            let operating = parse_i64_or_zero(report.operating_cashflow.as_deref());
            let capex = parse_i64_or_zero(report.capital_expenditures.as_deref());

            CashFlowPeriod {
                period: fiscal_period_label(&fiscal_date_ending),
                operating_cash_flow: operating,
                investing_cash_flow: parse_i64_or_zero(
                    report.cashflow_from_investment.as_deref(),
                ),
                financing_cash_flow: parse_i64_or_zero(
                    report.cashflow_from_financing.as_deref(),
                ),
                free_cash_flow: operating - capex,
                fiscal_date_ending,
            }
        })
        .collect()
}
