use avantage_rs::AvError;

use crate::common::{aapl_cash_flow_body, client_for, mock_cash_flow, mock_function, setup_server};

#[tokio::test]
async fn fetch_cash_flow_returns_the_report_list() {
    let server = setup_server();
    let mock = mock_cash_flow(&server, "AAPL", &aapl_cash_flow_body());
    let client = client_for(&server);

    let reports = avantage_rs::fetch_cash_flow(&client, "AAPL").await.unwrap();

    mock.assert();
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0].fiscal_date_ending.as_deref(), Some("2023-07-31"));
    assert_eq!(
        reports[0].operating_cashflow.as_deref(),
        Some("26380000000")
    );
}

#[tokio::test]
async fn empty_report_list_classifies_as_no_data() {
    let server = setup_server();
    let _mock = mock_cash_flow(&server, "AAPL", r#"{"quarterlyReports": []}"#);
    let client = client_for(&server);

    let err = avantage_rs::fetch_cash_flow(&client, "AAPL")
        .await
        .unwrap_err();
    assert_eq!(err, AvError::NoData("No cash flow data available".into()));
}

#[tokio::test]
async fn missing_report_list_classifies_as_no_data() {
    let server = setup_server();
    let _mock = mock_cash_flow(&server, "AAPL", r#"{"symbol": "AAPL"}"#);
    let client = client_for(&server);

    let err = avantage_rs::fetch_cash_flow(&client, "AAPL")
        .await
        .unwrap_err();
    assert_eq!(err, AvError::NoData("No cash flow data available".into()));
}

#[tokio::test]
async fn provider_note_classifies_as_rate_limit() {
    let server = setup_server();
    let _mock = mock_cash_flow(&server, "AAPL", r#"{"Note": "rate limited"}"#);
    let client = client_for(&server);

    let err = avantage_rs::fetch_cash_flow(&client, "AAPL")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AvError::RateLimit("API rate limit reached - please wait a minute".into())
    );
}

#[tokio::test]
async fn provider_error_message_classifies_as_symbol_not_found() {
    let server = setup_server();
    let _mock = mock_cash_flow(&server, "NOPE", r#"{"Error Message": "Invalid API call."}"#);
    let client = client_for(&server);

    let err = avantage_rs::fetch_cash_flow(&client, "NOPE")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AvError::SymbolNotFound("Cash flow data not available for this symbol".into())
    );
}

#[tokio::test]
async fn non_2xx_classifies_as_transport() {
    let server = setup_server();
    let _mock = mock_function(&server, "CASH_FLOW", "AAPL", 503, "busy");
    let client = client_for(&server);

    let err = avantage_rs::fetch_cash_flow(&client, "AAPL")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AvError::Transport("Failed to fetch cash flow data".into())
    );
}

#[tokio::test]
async fn fetched_reports_normalize_to_four_periods() {
    let server = setup_server();
    let _mock = mock_cash_flow(&server, "AAPL", &aapl_cash_flow_body());
    let client = client_for(&server);

    let reports = avantage_rs::fetch_cash_flow(&client, "AAPL").await.unwrap();
    let periods = avantage_rs::to_cash_flow_periods(&reports);

    assert_eq!(periods.len(), 4);
    assert_eq!(periods[0].period, "Q3 2023");
    assert_eq!(
        periods[0].free_cash_flow,
        26_380_000_000 - 2_093_000_000
    );
    assert_eq!(periods[3].period, "Q4 2022");
}
