//! Parameterized fetch-query construction.
//!
//! The fetch statement always carries a two-placeholder date-range
//! predicate; when a ticker filter is supplied it gains a membership
//! predicate with one placeholder per ticker. Ticker and date values are
//! only ever bound positionally, never spliced into the SQL text.

use crate::domain::date_key::DateKey;

/// Placeholder syntax of the target driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?1`, `?2`, ... (rusqlite)
    Sqlite,
    /// `$1`, `$2`, ... (postgres)
    Postgres,
}

impl Dialect {
    fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Sqlite => format!("?{index}"),
            Self::Postgres => format!("${index}"),
        }
    }
}

/// A bind value, kept driver-neutral so the domain depends on neither
/// database crate. Adapters convert to their driver's types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Int(i64),
    Text(String),
}

/// SQL text plus its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

/// Build the fetch statement for `tickers` over the inclusive range
/// [`from`, `to`]. An empty ticker slice means no ticker predicate.
///
/// `from <= to` is not checked here; an inverted range simply matches no
/// rows at the store. Ticker values pass through unvalidated.
pub fn build_fetch_query(
    tickers: &[String],
    from: DateKey,
    to: DateKey,
    dialect: Dialect,
) -> TransactionQuery {
    let mut sql = format!(
        "SELECT papername, date, close, volume FROM stockdata \
         WHERE date BETWEEN {} AND {}",
        dialect.placeholder(1),
        dialect.placeholder(2),
    );
    let mut params = vec![
        QueryParam::Int(from.encoded() as i64),
        QueryParam::Int(to.encoded() as i64),
    ];

    if !tickers.is_empty() {
        let placeholders: Vec<String> = (0..tickers.len())
            .map(|i| dialect.placeholder(i + 3))
            .collect();
        sql.push_str(&format!(" AND papername IN ({})", placeholders.join(", ")));
        params.extend(tickers.iter().map(|t| QueryParam::Text(t.clone())));
    }

    TransactionQuery { sql, params }
}
