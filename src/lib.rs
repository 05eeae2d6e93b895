//! avantage-rs: Alpha Vantage quote + cash-flow client.
//!
//! Fetches a `GLOBAL_QUOTE` and a quarterly `CASH_FLOW` statement for one
//! ticker, normalizes both into fixed-shape display records, and drives an
//! abstract [`Presenter`].
//!
//! The two provider calls for a search go out concurrently; each classifies
//! its own failures into [`AvError`] values carrying user-facing messages,
//! so nothing in the fetch path panics or leaks a raw transport error.
//!
//! ```no_run
//! # async fn demo() -> avantage_rs::FetchResult<()> {
//! let client = avantage_rs::AvClient::builder().api_key("demo").build()?;
//! let outcome = avantage_rs::search(&client, "aapl").await?;
//! println!("{} trades at {}", outcome.quote.name, outcome.quote.price);
//! # Ok(())
//! # }
//! ```

pub mod cashflow;
pub mod core;
pub mod format;
pub mod lookup;
pub mod presenter;
pub mod quote;
pub mod search;

pub use crate::cashflow::{QuarterlyReport, fetch_cash_flow, to_cash_flow_periods};
pub use crate::core::{
    AvClient, AvClientBuilder, AvError, CashFlowPeriod, FetchResult, SearchOutcome, StockQuote,
};
pub use crate::presenter::{Presenter, TextPresenter, run_search};
pub use crate::quote::{GlobalQuote, fetch_quote, to_quote};
pub use crate::search::search;
