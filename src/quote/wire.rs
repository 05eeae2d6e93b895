use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// Top-level GLOBAL_QUOTE response body.
///
/// The provider multiplexes errors into the same 200 response: an
/// `"Error Message"` for unknown symbols, a `"Note"` when the request quota
/// is exhausted.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteEnvelope {
    #[serde(rename = "Global Quote")]
    pub(crate) global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
}

/// Raw quote object exactly as the provider ships it: every value a string,
/// field names preserved bit-for-bit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}
