use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// Top-level CASH_FLOW response body. Same error multiplexing as the quote
/// endpoint: `"Error Message"` and `"Note"` arrive inside a 200 response.
#[derive(Debug, Deserialize)]
pub(crate) struct CashFlowEnvelope {
    #[serde(rename = "quarterlyReports")]
    pub(crate) quarterly_reports: Option<Vec<QuarterlyReport>>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
}

/// One quarterly report as the provider ships it: every monetary value a
/// string, field names preserved bit-for-bit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuarterlyReport {
    #[serde(rename = "fiscalDateEnding")]
    pub fiscal_date_ending: Option<String>,
    #[serde(rename = "operatingCashflow")]
    pub operating_cashflow: Option<String>,
    #[serde(rename = "cashflowFromInvestment")]
    pub cashflow_from_investment: Option<String>,
    #[serde(rename = "cashflowFromFinancing")]
    pub cashflow_from_financing: Option<String>,
    #[serde(rename = "capitalExpenditures")]
    pub capital_expenditures: Option<String>,
}
