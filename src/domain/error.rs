//! Domain error types.

use crate::domain::validation::RecordFailure;

/// A single record that breaks one of the expectations on its fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("stock_name is empty")]
    EmptyStockName,

    #[error("stock_name {stock_name:?} has leading or trailing whitespace")]
    PaddedStockName { stock_name: String },

    #[error("lag must be non-negative, got {lag}")]
    NegativeLag { lag: i32 },

    #[error("lag {lag} exceeds max_lag {max}")]
    LagExceedsMax { lag: i32, max: i32 },

    #[error("{field} is not finite")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} is outside [-{bound}, {bound}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        bound: f64,
    },

    #[error("duplicate record for {key}")]
    DuplicateKey { key: String },
}

/// Top-level error type for stocksent.
#[derive(Debug, thiserror::Error)]
pub enum StocksentError {
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

    #[error("cannot infer record format from {path}, expected a .json or .csv extension")]
    UnknownFormat { path: String },

    #[error("failed to decode {format} input: {reason}")]
    Decode { format: String, reason: String },

    #[error("failed to encode {format} output: {reason}")]
    Encode { format: String, reason: String },

    #[error("{} invalid {kind} record(s)", .failures.len())]
    InvalidRecords {
        kind: String,
        failures: Vec<RecordFailure>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StocksentError> for std::process::ExitCode {
    fn from(err: &StocksentError) -> Self {
        let code: u8 = match err {
            StocksentError::Io(_) => 1,
            StocksentError::ConfigParse { .. }
            | StocksentError::ConfigMissing { .. }
            | StocksentError::ConfigInvalid { .. } => 2,
            StocksentError::UnknownFormat { .. }
            | StocksentError::Decode { .. }
            | StocksentError::Encode { .. } => 3,
            StocksentError::InvalidRecords { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
