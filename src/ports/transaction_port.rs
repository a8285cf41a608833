//! Transaction store port trait.
//!
//! One master operation plus five convenience forms. Every form collapses
//! to [`TransactionPort::fetch`]; a single-date call is the range call
//! with `from == to`.

use crate::domain::aggregate::TransactionHistory;
use crate::domain::date_key::DateKey;
use crate::domain::error::StockDataError;

pub trait TransactionPort {
    /// Fetch consolidated transactions for `tickers` over the inclusive
    /// range [`from`, `to`]. An empty ticker slice fetches all tickers.
    /// No matching rows is not an error; the history comes back empty.
    fn fetch(
        &self,
        tickers: &[String],
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError>;

    /// One ticker, one day.
    fn fetch_ticker_on(
        &self,
        ticker: &str,
        date: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        self.fetch(&[ticker.to_string()], date, date)
    }

    /// One ticker over a range.
    fn fetch_ticker_range(
        &self,
        ticker: &str,
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        self.fetch(&[ticker.to_string()], from, to)
    }

    /// A set of tickers, one day.
    fn fetch_tickers_on(
        &self,
        tickers: &[String],
        date: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        self.fetch(tickers, date, date)
    }

    /// Every ticker, one day.
    fn fetch_all_on(&self, date: DateKey) -> Result<TransactionHistory, StockDataError> {
        self.fetch(&[], date, date)
    }

    /// Every ticker over a range.
    fn fetch_all_range(
        &self,
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        self.fetch(&[], from, to)
    }
}
