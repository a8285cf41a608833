//! Folds the raw row stream into the consolidated per-ticker history.
//!
//! Rows may arrive in any order. The first row seen for a (ticker, date)
//! pair becomes that date's observation; later rows for the same pair are
//! merged in via [`Transaction::merge`]. A ticker appears in the result
//! only if at least one of its rows was consumed.

use crate::domain::date_key::DateKey;
use crate::domain::transaction::{Transaction, TransactionRow};
use std::collections::{BTreeMap, HashMap};

/// Ticker → date-ordered consolidated observations.
pub type TransactionHistory = HashMap<String, BTreeMap<DateKey, Transaction>>;

/// Fold a single row into the history under construction. Adapters call
/// this while walking their cursor so no intermediate row vector is built.
pub fn fold_row(history: &mut TransactionHistory, row: TransactionRow) {
    let key = DateKey::from_encoded(row.date);
    let series = history.entry(row.ticker).or_default();
    series
        .entry(key)
        .and_modify(|obs| obs.merge(row.close, row.volume))
        .or_insert_with(|| Transaction::new(row.close, row.volume));
}

/// Fold a whole row stream. The result is complete once this returns;
/// there is no partial output.
pub fn aggregate_rows<I>(rows: I) -> TransactionHistory
where
    I: IntoIterator<Item = TransactionRow>,
{
    let mut history = TransactionHistory::new();
    for row in rows {
        fold_row(&mut history, row);
    }
    history
}
