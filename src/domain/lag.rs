//! Best-fit lag between a stock's sentiment signal and its returns.

use crate::domain::error::RecordError;
use crate::domain::record::{Record, RecordKind};
use crate::domain::validation::{check_bounded, check_stock_name, ValidationLimits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagData {
    pub stock_name: String,
    pub max_correlation: f64,
    pub lag: i32,
}

/// Same shape as [`LagData`]; the two names are interchangeable.
pub type CorrelationData = LagData;

impl LagData {
    pub fn new(stock_name: impl Into<String>, max_correlation: f64, lag: i32) -> Self {
        Self {
            stock_name: stock_name.into(),
            max_correlation,
            lag,
        }
    }
}

impl Record for LagData {
    const KIND: RecordKind = RecordKind::Lag;

    type Key = String;

    fn stock_name(&self) -> &str {
        &self.stock_name
    }

    fn key(&self) -> String {
        self.stock_name.clone()
    }

    fn validate(&self, limits: &ValidationLimits) -> Result<(), RecordError> {
        check_stock_name(&self.stock_name)?;
        check_bounded("max_correlation", self.max_correlation, limits.correlation_bound)?;
        if self.lag < 0 {
            return Err(RecordError::NegativeLag { lag: self.lag });
        }
        if let Some(max) = limits.max_lag {
            if self.lag > max {
                return Err(RecordError::LagExceedsMax { lag: self.lag, max });
            }
        }
        Ok(())
    }
}
