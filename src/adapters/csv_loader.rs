//! CSV transaction loader for the `import` command.
//!
//! Expected columns: `ticker,date,close,volume` with a header row and
//! `%Y-%m-%d` dates. Dates are re-encoded to the store's integer form.

use crate::domain::date_key::DateKey;
use crate::domain::error::StockDataError;
use crate::domain::transaction::TransactionRow;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRow>, StockDataError> {
    let path = path.as_ref();
    let file = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| StockDataError::Import {
        file: file.clone(),
        reason: e.to_string(),
    })?;

    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut rows = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| StockDataError::Import {
            file: file.clone(),
            reason: format!("CSV parse error: {e}"),
        })?;

        let ticker = record
            .get(0)
            .ok_or_else(|| StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: missing ticker column", line + 1),
            })?
            .to_string();

        let date_str = record.get(1).ok_or_else(|| StockDataError::Import {
            file: file.clone(),
            reason: format!("record {}: missing date column", line + 1),
        })?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: invalid date {date_str:?}: {e}", line + 1),
            }
        })?;

        let close: i64 = record
            .get(2)
            .ok_or_else(|| StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: missing close column", line + 1),
            })?
            .parse()
            .map_err(|e| StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: invalid close value: {e}", line + 1),
            })?;

        let volume: i64 = record
            .get(3)
            .ok_or_else(|| StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: missing volume column", line + 1),
            })?
            .parse()
            .map_err(|e| StockDataError::Import {
                file: file.clone(),
                reason: format!("record {}: invalid volume value: {e}", line + 1),
            })?;

        rows.push(TransactionRow {
            ticker,
            date: DateKey::from(date).encoded(),
            close,
            volume,
        });
    }

    Ok(rows)
}
