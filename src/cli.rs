//! CLI definition and dispatch.
//!
//! `fetch` prints consolidated transactions to stdout (one line per
//! ticker-date) with status on stderr; `import` loads CSV rows into the
//! store; `init-schema` creates the table.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::date_key::DateKey;
use crate::domain::error::StockDataError;

#[derive(Parser, Debug)]
#[command(name = "stockdata", about = "Historical stock-transaction store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch consolidated transactions for tickers over a date or range
    Fetch {
        #[arg(short, long)]
        config: PathBuf,
        /// Comma-separated ticker list; omit to fetch all tickers
        #[arg(long)]
        tickers: Option<String>,
        /// Single day (YYYY-MM-DD); shorthand for --from D --to D
        #[arg(long, conflicts_with_all = ["from", "to"])]
        date: Option<String>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Import transaction rows from a CSV file
    Import {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Create the stockdata table
    InitSchema {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Fetch {
            config,
            tickers,
            date,
            from,
            to,
        } => run_fetch(&config, tickers.as_deref(), date.as_deref(), from.as_deref(), to.as_deref()),
        Command::Import { config, file } => run_import(&config, &file),
        Command::InitSchema { config } => run_init_schema(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = StockDataError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Parse a `YYYY-MM-DD` CLI argument into a [`DateKey`].
pub fn parse_date(value: &str) -> Result<DateKey, StockDataError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(DateKey::from)
        .map_err(|_| StockDataError::InvalidDate {
            value: value.to_string(),
        })
}

/// Split a comma-separated ticker list. Values are trimmed but otherwise
/// passed through unvalidated; symbol format is the store's problem.
pub fn parse_tickers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve `--date` or `--from`/`--to` into an inclusive range.
pub fn resolve_range(
    date: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(DateKey, DateKey), StockDataError> {
    match (date, from, to) {
        (Some(d), _, _) => {
            let key = parse_date(d)?;
            Ok((key, key))
        }
        (None, Some(f), Some(t)) => Ok((parse_date(f)?, parse_date(t)?)),
        _ => Err(StockDataError::InvalidDate {
            value: "(provide --date, or both --from and --to)".to_string(),
        }),
    }
}

fn run_fetch(
    config_path: &PathBuf,
    tickers: Option<&str>,
    date: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let tickers = tickers.map(parse_tickers).unwrap_or_default();
    let (from, to) = match resolve_range(date, from, to) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::adapters::sqlite_adapter::SqliteAdapter;
        use crate::ports::transaction_port::TransactionPort;

        let store = match SqliteAdapter::from_config(&config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        eprintln!("Fetching {} to {}", from, to);
        let history = match store.fetch(&tickers, from, to) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let mut names: Vec<&String> = history.keys().collect();
        names.sort();
        for name in &names {
            for (date, obs) in &history[*name] {
                println!("{name} {date} close={} volume={}", obs.price, obs.volume);
            }
        }
        eprintln!("{} tickers found", names.len());
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, tickers, from, to);
        eprintln!("error: sqlite feature is required for fetch");
        ExitCode::from(1)
    }
}

fn run_import(config_path: &PathBuf, file: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let rows = match crate::adapters::csv_loader::load_rows(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::adapters::sqlite_adapter::SqliteAdapter;

        let store = match SqliteAdapter::from_config(&config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if let Err(e) = store.initialize_schema().and_then(|()| store.insert_rows(&rows)) {
            eprintln!("error: {e}");
            return (&e).into();
        }

        eprintln!("Imported {} rows from {}", rows.len(), file.display());
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, rows);
        eprintln!("error: sqlite feature is required for import");
        ExitCode::from(1)
    }
}

fn run_init_schema(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::adapters::sqlite_adapter::SqliteAdapter;

        let store = match SqliteAdapter::from_config(&config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if let Err(e) = store.initialize_schema() {
            eprintln!("error: {e}");
            return (&e).into();
        }

        eprintln!("Schema initialized");
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = config;
        eprintln!("error: sqlite feature is required for init-schema");
        ExitCode::from(1)
    }
}
