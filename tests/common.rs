#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

pub const API_KEY: &str = "demo";

/// Route instrumented spans to the test writer when running with
/// `--features tracing-subscriber`; a no-op otherwise.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_tracing() {}

pub fn setup_server() -> MockServer {
    init_tracing();
    MockServer::start()
}

/// Client pointed at the mock server's `/query` path.
pub fn client_for(server: &MockServer) -> avantage_rs::AvClient {
    avantage_rs::AvClient::builder()
        .base_url(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .api_key(API_KEY)
        .build()
        .unwrap()
}

pub fn mock_function<'a>(
    server: &'a MockServer,
    function: &str,
    symbol: &str,
    status: u16,
    body: &str,
) -> Mock<'a> {
    let function = function.to_string();
    let symbol = symbol.to_string();
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", function.as_str())
            .query_param("symbol", symbol.as_str())
            .query_param("apikey", API_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(&body);
    })
}

pub fn mock_global_quote<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    mock_function(server, "GLOBAL_QUOTE", symbol, 200, body)
}

pub fn mock_cash_flow<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    mock_function(server, "CASH_FLOW", symbol, 200, body)
}

/// The well-formed AAPL quote payload used across the end-to-end tests.
pub fn aapl_quote_body() -> String {
    serde_json::json!({
        "Global Quote": {
            "01. symbol": "AAPL",
            "02. open": "149.00",
            "03. high": "151",
            "04. low": "149",
            "05. price": "150.00",
            "06. volume": "1000000",
            "07. latest trading day": "2023-08-01",
            "08. previous close": "148",
            "09. change": "2.00",
            "10. change percent": "1.35%"
        }
    })
    .to_string()
}

/// Five quarterly reports, most recent first, as CASH_FLOW delivers them.
pub fn aapl_cash_flow_body() -> String {
    serde_json::json!({
        "symbol": "AAPL",
        "quarterlyReports": [
            {
                "fiscalDateEnding": "2023-07-31",
                "operatingCashflow": "26380000000",
                "cashflowFromInvestment": "-1337000000",
                "cashflowFromFinancing": "-24048000000",
                "capitalExpenditures": "2093000000"
            },
            {
                "fiscalDateEnding": "2023-04-30",
                "operatingCashflow": "28560000000",
                "cashflowFromInvestment": "-2093000000",
                "cashflowFromFinancing": "-25724000000",
                "capitalExpenditures": "3122000000"
            },
            {
                "fiscalDateEnding": "2023-01-31",
                "operatingCashflow": "34005000000",
                "cashflowFromInvestment": "-1445000000",
                "cashflowFromFinancing": "-35563000000",
                "capitalExpenditures": "3787000000"
            },
            {
                "fiscalDateEnding": "2022-10-31",
                "operatingCashflow": "24127000000",
                "cashflowFromInvestment": "-195000000",
                "cashflowFromFinancing": "-26794000000",
                "capitalExpenditures": "3289000000"
            },
            {
                "fiscalDateEnding": "2022-07-31",
                "operatingCashflow": "22892000000",
                "cashflowFromInvestment": "-4234000000",
                "cashflowFromFinancing": "-27445000000",
                "capitalExpenditures": "2102000000"
            }
        ]
    })
    .to_string()
}
