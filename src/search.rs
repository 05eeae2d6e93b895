//! One user-initiated search: both provider calls issued together.

use crate::cashflow;
use crate::core::{AvClient, AvError, FetchResult, SearchOutcome};
use crate::quote;

/// Run one search for `symbol`.
///
/// The input is trimmed and upper-cased; an empty input is rejected before
/// anything goes on the wire. Both fetches go out concurrently and the
/// search waits for both to settle. A quote failure fails the whole search;
/// a cash-flow failure only clears the optional section, so `cash_flow` is
/// `Some` exactly when the `CASH_FLOW` call succeeded with real data.
///
/// There is no cancellation and no retry; an overlapping second search is
/// not guarded against (last write wins at the presenter).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn search(client: &AvClient, symbol: &str) -> FetchResult<SearchOutcome> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AvError::EmptySymbol);
    }

    let (quote_result, cash_flow_result) = tokio::join!(
        quote::fetch_quote(client, &symbol),
        cashflow::fetch_cash_flow(client, &symbol),
    );

    let raw_quote = quote_result?;
    let stock_quote = quote::to_quote(&raw_quote, &symbol);

    let cash_flow = match cash_flow_result {
        Ok(reports) => {
            let periods = cashflow::to_cash_flow_periods(&reports);
            if periods.is_empty() { None } else { Some(periods) }
        }
        Err(_) => None,
    };

    Ok(SearchOutcome {
        quote: stock_quote,
        cash_flow,
    })
}
