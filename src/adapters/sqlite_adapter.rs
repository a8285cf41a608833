//! SQLite transaction store adapter.

use crate::domain::aggregate::{self, TransactionHistory};
use crate::domain::date_key::DateKey;
use crate::domain::error::StockDataError;
use crate::domain::query::{build_fetch_query, Dialect, QueryParam};
use crate::domain::transaction::TransactionRow;
use crate::ports::config_port::ConfigPort;
use crate::ports::transaction_port::TransactionPort;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub struct SqliteAdapter {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteAdapter {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, StockDataError> {
        let db_path =
            config
                .get_string("sqlite", "path")
                .ok_or_else(|| StockDataError::ConfigMissing {
                    section: "sqlite".into(),
                    key: "path".into(),
                })?;

        let pool_size = config.get_int("sqlite", "pool_size", 4) as u32;

        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(|e: r2d2::Error| StockDataError::Database {
                reason: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    pub fn in_memory() -> Result<Self, StockDataError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e: r2d2::Error| StockDataError::Database {
                reason: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create the `stockdata` table. The `per` and `time` columns exist in
    /// the source feed but are not read back by the fetch path.
    pub fn initialize_schema(&self) -> Result<(), StockDataError> {
        let conn = self
            .pool
            .get()
            .map_err(|e: r2d2::Error| StockDataError::Database {
                reason: e.to_string(),
            })?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS stockdata (
                papername TEXT NOT NULL,
                per INTEGER NOT NULL DEFAULT 0,
                date INTEGER NOT NULL,
                time INTEGER NOT NULL DEFAULT 0,
                close INTEGER NOT NULL,
                volume INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_stockdata_papername_date
                ON stockdata(papername, date);",
        )
        .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
            reason: e.to_string(),
        })?;

        Ok(())
    }

    pub fn insert_rows(&self, rows: &[TransactionRow]) -> Result<(), StockDataError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e: r2d2::Error| StockDataError::Database {
                reason: e.to_string(),
            })?;

        let tx = conn
            .transaction()
            .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;

        for row in rows {
            tx.execute(
                "INSERT INTO stockdata (papername, per, date, time, close, volume)
                 VALUES (?1, 0, ?2, 0, ?3, ?4)",
                params![row.ticker, row.date, row.close, row.volume],
            )
            .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;
        }

        tx.commit()
            .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

fn bind_value(param: &QueryParam) -> rusqlite::types::Value {
    match param {
        QueryParam::Int(i) => rusqlite::types::Value::Integer(*i),
        QueryParam::Text(s) => rusqlite::types::Value::Text(s.clone()),
    }
}

impl TransactionPort for SqliteAdapter {
    fn fetch(
        &self,
        tickers: &[String],
        from: DateKey,
        to: DateKey,
    ) -> Result<TransactionHistory, StockDataError> {
        let conn = self
            .pool
            .get()
            .map_err(|e: r2d2::Error| StockDataError::Database {
                reason: e.to_string(),
            })?;

        let query = build_fetch_query(tickers, from, to, Dialect::Sqlite);

        let mut stmt =
            conn.prepare(&query.sql)
                .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                    reason: e.to_string(),
                })?;

        let mut rows = stmt
            .query(rusqlite::params_from_iter(
                query.params.iter().map(bind_value),
            ))
            .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;

        let mut history = TransactionHistory::new();
        loop {
            let row = rows
                .next()
                .map_err(|e: rusqlite::Error| StockDataError::DatabaseQuery {
                    reason: e.to_string(),
                })?;
            let Some(row) = row else { break };

            let raw = (|| -> Result<TransactionRow, rusqlite::Error> {
                Ok(TransactionRow {
                    ticker: row.get("papername")?,
                    date: row.get("date")?,
                    close: row.get("close")?,
                    volume: row.get("volume")?,
                })
            })()
            .map_err(|e| StockDataError::DatabaseQuery {
                reason: e.to_string(),
            })?;

            aggregate::fold_row(&mut history, raw);
        }

        Ok(history)
    }
}
