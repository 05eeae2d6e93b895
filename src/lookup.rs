//! Static symbol tables used to enrich the quote display.
//!
//! These are deliberately small mapping constants: extending coverage is a
//! data edit, not a logic change.

/// Company names for commonly searched tickers.
const COMPANY_NAMES: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("TSLA", "Tesla, Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("META", "Meta Platforms, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("NFLX", "Netflix, Inc."),
    ("IBM", "International Business Machines Corporation"),
    ("ORCL", "Oracle Corporation"),
    ("CRM", "Salesforce, Inc."),
    ("ADBE", "Adobe Inc."),
];

/// Rough share counts in millions, for market-cap estimation. The quote
/// endpoint carries no share count of its own.
const SHARE_ESTIMATES_MILLIONS: &[(&str, f64)] = &[
    ("AAPL", 15_500.0),
    ("GOOGL", 12_800.0),
    ("MSFT", 7_400.0),
    ("TSLA", 3_200.0),
    ("AMZN", 10_700.0),
    ("META", 2_700.0),
    ("NVDA", 2_500.0),
    ("NFLX", 440.0),
    ("IBM", 920.0),
    ("ORCL", 2_700.0),
];

/// Share count (millions) assumed for symbols not in the table: one billion
/// shares.
const DEFAULT_SHARES_MILLIONS: f64 = 1_000.0;

/// Display name for `symbol`, if tabulated.
pub fn company_name(symbol: &str) -> Option<&'static str> {
    COMPANY_NAMES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
}

/// Estimated shares outstanding for `symbol`, in millions.
pub fn shares_outstanding_millions(symbol: &str) -> f64 {
    SHARE_ESTIMATES_MILLIONS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map_or(DEFAULT_SHARES_MILLIONS, |(_, shares)| *shares)
}
