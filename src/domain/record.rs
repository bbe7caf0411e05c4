//! Shared record behaviour: kind tag, join key, and per-record validation.

use crate::domain::error::RecordError;
use crate::domain::validation::ValidationLimits;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Line,
    Lag,
    Heatmap,
}

impl RecordKind {
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Line => "line",
            RecordKind::Lag => "lag",
            RecordKind::Heatmap => "heatmap",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A serializable record keyed on `stock_name`.
///
/// `key()` identifies the record within a batch: two records with the same
/// key describe the same observation and are reported as duplicates.
pub trait Record: Serialize + DeserializeOwned {
    const KIND: RecordKind;

    type Key: Ord + Clone + fmt::Display;

    fn stock_name(&self) -> &str;

    fn key(&self) -> Self::Key;

    fn validate(&self, limits: &ValidationLimits) -> Result<(), RecordError>;
}
