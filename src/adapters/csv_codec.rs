//! CSV record codec: header row of field names, one record per row.
//!
//! An empty batch encodes to an empty string, and empty or header-only input
//! decodes to an empty batch. Fields are trimmed on decode, so a padded
//! `stock_name` cannot survive CSV; validation rejects padded names.

use crate::domain::error::StocksentError;
use crate::domain::record::Record;
use crate::ports::record_codec::{RecordCodec, RecordFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

fn encode_error(reason: impl ToString) -> StocksentError {
    StocksentError::Encode {
        format: RecordFormat::Csv.to_string(),
        reason: reason.to_string(),
    }
}

impl RecordCodec for CsvCodec {
    fn format(&self) -> RecordFormat {
        RecordFormat::Csv
    }

    fn encode<R: Record>(&self, records: &[R]) -> Result<String, StocksentError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for record in records {
            wtr.serialize(record).map_err(encode_error)?;
        }
        let bytes = wtr.into_inner().map_err(encode_error)?;
        let output = String::from_utf8(bytes).map_err(encode_error)?;
        tracing::debug!(kind = %R::KIND, count = records.len(), "encoded csv");
        Ok(output)
    }

    fn decode<R: Record>(&self, input: &str) -> Result<Vec<R>, StocksentError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let mut records = Vec::new();
        for result in rdr.deserialize::<R>() {
            let record = result.map_err(|e| StocksentError::Decode {
                format: RecordFormat::Csv.to_string(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        tracing::debug!(kind = %R::KIND, count = records.len(), "decoded csv");
        Ok(records)
    }
}
