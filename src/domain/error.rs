//! Domain error types.

/// Top-level error type for stockdata.
#[derive(Debug, thiserror::Error)]
pub enum StockDataError {
    #[error("database error: {reason}")]
    Database { reason: String },

    #[error("database query error: {reason}")]
    DatabaseQuery { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid date {value}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("import error in {file}: {reason}")]
    Import { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StockDataError> for std::process::ExitCode {
    fn from(err: &StockDataError) -> Self {
        let code: u8 = match err {
            StockDataError::Io(_) => 1,
            StockDataError::ConfigParse { .. }
            | StockDataError::ConfigMissing { .. }
            | StockDataError::ConfigInvalid { .. } => 2,
            StockDataError::Database { .. } | StockDataError::DatabaseQuery { .. } => 3,
            StockDataError::InvalidDate { .. } => 4,
            StockDataError::Import { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
