//! Record (de)serialization port trait.

use crate::domain::error::StocksentError;
use crate::domain::record::Record;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    pub fn name(&self) -> &'static str {
        match self {
            RecordFormat::Json => "json",
            RecordFormat::Csv => "csv",
        }
    }

    /// Infer the format from a `.json` or `.csv` extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RecordFormat::Json),
            "csv" => Some(RecordFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes and decodes whole batches of one record kind.
pub trait RecordCodec {
    fn format(&self) -> RecordFormat;

    fn encode<R: Record>(&self, records: &[R]) -> Result<String, StocksentError>;

    fn decode<R: Record>(&self, input: &str) -> Result<Vec<R>, StocksentError>;
}
