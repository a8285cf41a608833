//! PostgreSQL transaction store adapter.

use crate::domain::aggregate::{self, TransactionHistory};
use crate::domain::date_key::DateKey;
use crate::domain::error::StockDataError;
use crate::domain::query::{build_fetch_query, Dialect, QueryParam};
use crate::domain::transaction::TransactionRow;
use crate::ports::config_port::ConfigPort;
use crate::ports::transaction_port::TransactionPort;
use postgres::types::ToSql;
use postgres::{Client, NoTls};
use std::cell::RefCell;

pub struct PostgresAdapter {
    client: RefCell<Client>,
}

impl PostgresAdapter {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, StockDataError> {
        // Try [postgres] connection_string first, fall back to [database] conninfo
        let connection_string = config
            .get_string("postgres", "connection_string")
            .or_else(|| config.get_string("database", "conninfo"))
            .ok_or_else(|| StockDataError::ConfigMissing {
                section: "database".into(),
                key: "conninfo".into(),
            })?;

        let client =
            Client::connect(&connection_string, NoTls).map_err(|e| StockDataError::Database {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client: RefCell::new(client),
        })
    }
}

impl TransactionPort for PostgresAdapter {
    fn fetch(
        &self,
        tickers: &[String],
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        let query = build_fetch_query(tickers, from, to, Dialect::Postgres);

        // The stockdata columns are INT4; bind the encoded dates as i32.
        let values: Vec<Box<dyn ToSql + Sync>> = query
            .params
            .iter()
            .map(|p| match p {
                QueryParam::Int(i) => Box::new(*i as i32) as Box<dyn ToSql + Sync>,
                QueryParam::Text(s) => Box::new(s.clone()) as Box<dyn ToSql + Sync>,
            })
            .collect();
        let params: Vec<&(dyn ToSql + Sync)> = values.iter().map(AsRef::as_ref).collect();

        let rows = self
            .client
            .borrow_mut()
            .query(&query.sql, &params)
            .map_err(|e| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;

        let mut history = TransactionHistory::new();
        for row in rows {
            let close: i32 = row.get("close");
            let volume: i32 = row.get("volume");
            aggregate::fold_row(
                &mut history,
                TransactionRow {
                    ticker: row.get("papername"),
                    date: row.get("date"),
                    close: close as i64,
                    volume: volume as i64,
                },
            );
        }

        Ok(history)
    }
}
