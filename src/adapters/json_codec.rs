//! JSON record codec: a top-level array of record objects.

use crate::domain::error::StocksentError;
use crate::domain::record::Record;
use crate::ports::record_codec::{RecordCodec, RecordFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pub pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl RecordCodec for JsonCodec {
    fn format(&self) -> RecordFormat {
        RecordFormat::Json
    }

    fn encode<R: Record>(&self, records: &[R]) -> Result<String, StocksentError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };
        let output = encoded.map_err(|e| StocksentError::Encode {
            format: RecordFormat::Json.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(kind = %R::KIND, count = records.len(), "encoded json");
        Ok(output)
    }

    fn decode<R: Record>(&self, input: &str) -> Result<Vec<R>, StocksentError> {
        let records: Vec<R> = serde_json::from_str(input).map_err(|e| StocksentError::Decode {
            format: RecordFormat::Json.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(kind = %R::KIND, count = records.len(), "decoded json");
        Ok(records)
    }
}
