//! Rendering seam between the search core and whatever displays it.
//!
//! The core is testable with no rendering surface attached; [`run_search`]
//! is the only place that touches a [`Presenter`].

use std::io::Write;

use crate::core::{AvClient, CashFlowPeriod, FetchResult, SearchOutcome, StockQuote};
use crate::format;
use crate::search;

/// Rendering surface for one search result.
///
/// `render_cash_flow` is only ever called with a non-empty list that came
/// from a genuine provider success; implementations never see an empty
/// table.
pub trait Presenter {
    fn render_quote(&mut self, quote: &StockQuote);
    fn render_cash_flow(&mut self, periods: &[CashFlowPeriod]);
    fn set_loading(&mut self, loading: bool);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
}

/// Run one search against `presenter`.
///
/// The loading indicator is cleared on every exit path: success, classified
/// error, or anything else [`search::search`] surfaces. The outcome is also
/// returned so callers can hold the current result themselves; no global
/// state is kept here.
pub async fn run_search<P: Presenter>(
    client: &AvClient,
    presenter: &mut P,
    symbol: &str,
) -> FetchResult<SearchOutcome> {
    presenter.set_loading(true);
    presenter.clear_error();

    let result = search::search(client, symbol).await;

    match &result {
        Ok(outcome) => {
            presenter.render_quote(&outcome.quote);
            if let Some(periods) = &outcome.cash_flow
                && !periods.is_empty()
            {
                presenter.render_cash_flow(periods);
            }
        }
        Err(err) => presenter.show_error(&err.to_string()),
    }

    presenter.set_loading(false);
    result
}

/* ---------------- Text rendition ---------------- */

/// Plain-text presenter for terminals and tests. Writes are best effort; a
/// failing sink drops output rather than failing the search.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Hand back the sink, e.g. to inspect what was rendered.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render_quote(&mut self, quote: &StockQuote) {
        let plus = if quote.change >= 0.0 { "+" } else { "" };
        let pe = quote
            .pe_ratio
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));

        let _ = writeln!(self.out, "{} {}", quote.symbol, quote.name);
        let _ = writeln!(
            self.out,
            "price {}  change {plus}{} ({:.2}%)",
            format::currency(quote.price),
            format::currency(quote.change),
            quote.change_percent
        );
        let _ = writeln!(
            self.out,
            "volume {}  market cap {}  P/E {pe}",
            format::number(quote.volume),
            format::large_number(quote.market_cap)
        );
        let _ = writeln!(
            self.out,
            "52w high {}  52w low {}  prev close {}",
            format::currency(quote.high_52_week),
            format::currency(quote.low_52_week),
            format::currency(quote.previous_close)
        );
    }

    fn render_cash_flow(&mut self, periods: &[CashFlowPeriod]) {
        let _ = writeln!(self.out, "quarterly cash flow");
        for p in periods {
            let _ = writeln!(
                self.out,
                "{}  operating {}  investing {}  financing {}  free {}",
                p.period,
                format::large_number(p.operating_cash_flow as f64),
                format::large_number(p.investing_cash_flow as f64),
                format::large_number(p.financing_cash_flow as f64),
                format::large_number(p.free_cash_flow as f64)
            );
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            let _ = writeln!(self.out, "loading...");
        }
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.out, "error: {message}");
    }

    fn clear_error(&mut self) {}
}
