#![allow(dead_code)]

use stockdata::domain::aggregate::{aggregate_rows, TransactionHistory};
use stockdata::domain::date_key::DateKey;
use stockdata::domain::error::StockDataError;
pub use stockdata::domain::transaction::{Transaction, TransactionRow};
use stockdata::ports::transaction_port::TransactionPort;

/// In-memory stand-in for a transaction store: applies the range and
/// membership filters itself, then aggregates like a real adapter would.
pub struct MockTransactionPort {
    pub rows: Vec<TransactionRow>,
    pub error: Option<String>,
}

impl MockTransactionPort {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<TransactionRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TransactionPort for MockTransactionPort {
    fn fetch(
        &self,
        tickers: &[String],
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        if let Some(reason) = &self.error {
            return Err(StockDataError::Database {
                reason: reason.clone(),
            });
        }

        let matching = self.rows.iter().filter(|r| {
            let key = DateKey::from_encoded(r.date);
            key >= from
                && key <= to
                && (tickers.is_empty() || tickers.iter().any(|t| *t == r.ticker))
        });

        Ok(aggregate_rows(matching.cloned()))
    }
}

pub fn row(ticker: &str, date: i32, close: i64, volume: i64) -> TransactionRow {
    TransactionRow {
        ticker: ticker.to_string(),
        date,
        close,
        volume,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> DateKey {
    DateKey::new(year, month, day)
}

/// The worked example rows: two colliding AAA rows and one BBB row.
pub fn sample_rows() -> Vec<TransactionRow> {
    vec![
        row("AAA", 20140101, 100, 10),
        row("AAA", 20140101, 200, 20),
        row("BBB", 20140102, 50, 5),
    ]
}
