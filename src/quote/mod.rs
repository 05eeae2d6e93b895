//! Real-time quote: the `GLOBAL_QUOTE` function plus display normalization.

mod wire;

pub use wire::GlobalQuote;

use crate::core::conversions::{parse_f64_or_zero, parse_i64_or_zero, parse_percent_or_zero};
use crate::core::{AvClient, AvError, FetchResult, StockQuote};
use crate::lookup;
use wire::QuoteEnvelope;

const FUNCTION: &str = "GLOBAL_QUOTE";

/// Share counts are tabulated in millions.
const MILLION: f64 = 1_000_000.0;

/* ---------------- Fetcher ---------------- */

/// Fetch the raw real-time quote for `symbol`.
///
/// Expects `symbol` trimmed and upper-cased by the caller. Every failure
/// comes back as a classified [`AvError`]; this never panics and never
/// surfaces a raw transport or decode error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_quote(client: &AvClient, symbol: &str) -> FetchResult<GlobalQuote> {
    let url = client.query_url(FUNCTION, symbol);

    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| AvError::Unexpected(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AvError::Transport(format!(
            "API error: {}",
            status.as_u16()
        )));
    }

    let envelope: QuoteEnvelope = resp
        .json()
        .await
        .map_err(|e| AvError::Unexpected(e.to_string()))?;

    if envelope.error_message.is_some() {
        return Err(AvError::SymbolNotFound(
            "Stock symbol not found. Please check the symbol and try again.".into(),
        ));
    }
    if envelope.note.is_some() {
        return Err(AvError::RateLimit(
            "API rate limit reached. Please try again in a minute.".into(),
        ));
    }

    envelope
        .global_quote
        .ok_or_else(|| AvError::NoData("No data available for this symbol".into()))
}

/* ---------------- Transformer ---------------- */

/// Normalize a raw quote into the display record. Pure and infallible:
/// anything missing or malformed becomes 0.
///
/// The quote payload carries no P/E and no 52-week range, so `pe_ratio`
/// stays `None` and the daily high/low stand in for the 52-week columns.
pub fn to_quote(raw: &GlobalQuote, symbol: &str) -> StockQuote {
    let price = parse_f64_or_zero(raw.price.as_deref());
    let high = parse_f64_or_zero(raw.high.as_deref());
    let low = parse_f64_or_zero(raw.low.as_deref());

    StockQuote {
        symbol: symbol.to_string(),
        name: lookup::company_name(symbol)
            .map_or_else(|| format!("{symbol} Corporation"), str::to_string),
        price,
        change: parse_f64_or_zero(raw.change.as_deref()),
        change_percent: parse_percent_or_zero(raw.change_percent.as_deref()),
        volume: parse_i64_or_zero(raw.volume.as_deref()),
        market_cap: estimate_market_cap(price, symbol),
        pe_ratio: None,
        daily_high: high,
        daily_low: low,
        high_52_week: high,
        low_52_week: low,
        previous_close: parse_f64_or_zero(raw.previous_close.as_deref()),
    }
}

/// Rough market cap: price times the tabulated share count.
fn estimate_market_cap(price: f64, symbol: &str) -> f64 {
    price * lookup::shares_outstanding_millions(symbol) * MILLION
}
