use serde::Serialize;

/* ----- QUOTE (shared by quote/, search, presenter) ----- */

/// Normalized real-time snapshot for one ticker, shaped for display.
///
/// Numeric fields default to exactly `0` when the upstream field is missing
/// or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    /// Estimated as price times a static share-count table; the quote
    /// endpoint does not carry a market cap.
    pub market_cap: f64,
    /// Not present in the GLOBAL_QUOTE payload; always `None` here.
    pub pe_ratio: Option<f64>,
    pub daily_high: f64,
    pub daily_low: f64,
    /// Daily high reused as a placeholder; the quote endpoint has no
    /// 52-week range. Known upstream limitation.
    pub high_52_week: f64,
    /// Daily low, same placeholder.
    pub low_52_week: f64,
    pub previous_close: f64,
}

/* ----- CASH FLOW (shared by cashflow/, search, presenter) ----- */

/// One fiscal quarter of cash-flow figures plus the derived free cash flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowPeriod {
    /// Display label, `"Q<n> <year>"` of the fiscal quarter end.
    pub period: String,
    pub operating_cash_flow: i64,
    pub investing_cash_flow: i64,
    pub financing_cash_flow: i64,
    /// Operating cash flow minus capital expenditures.
    pub free_cash_flow: i64,
    /// The provider's period-end date string, passed through verbatim.
    pub fiscal_date_ending: String,
}

/* ----- SEARCH ----- */

/// Everything one search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub quote: StockQuote,
    /// `None` whenever the cash-flow fetch failed or returned no real data;
    /// presenters hide that section instead of rendering zero rows.
    pub cash_flow: Option<Vec<CashFlowPeriod>>,
}
