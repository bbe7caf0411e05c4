//! Per-stock correlation at fixed lag offsets, one through five days.

use crate::domain::error::RecordError;
use crate::domain::record::{Record, RecordKind};
use crate::domain::validation::{check_bounded, check_stock_name, ValidationLimits};
use serde::{Deserialize, Serialize};

const LAG_FIELDS: [&str; 5] = [
    "one_day_lag",
    "two_day_lag",
    "three_day_lag",
    "four_day_lag",
    "five_day_lag",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub stock_name: String,
    pub one_day_lag: f64,
    pub two_day_lag: f64,
    pub three_day_lag: f64,
    pub four_day_lag: f64,
    pub five_day_lag: f64,
}

impl HeatmapData {
    pub const LAG_OFFSETS: [u32; 5] = [1, 2, 3, 4, 5];

    pub fn from_values(stock_name: impl Into<String>, values: [f64; 5]) -> Self {
        let [one_day_lag, two_day_lag, three_day_lag, four_day_lag, five_day_lag] = values;
        Self {
            stock_name: stock_name.into(),
            one_day_lag,
            two_day_lag,
            three_day_lag,
            four_day_lag,
            five_day_lag,
        }
    }

    /// Values in offset order, index 0 is the one-day lag.
    pub fn values(&self) -> [f64; 5] {
        [
            self.one_day_lag,
            self.two_day_lag,
            self.three_day_lag,
            self.four_day_lag,
            self.five_day_lag,
        ]
    }

    pub fn at_lag(&self, days: u32) -> Option<f64> {
        match days {
            1..=5 => Some(self.values()[(days - 1) as usize]),
            _ => None,
        }
    }
}

impl Record for HeatmapData {
    const KIND: RecordKind = RecordKind::Heatmap;

    type Key = String;

    fn stock_name(&self) -> &str {
        &self.stock_name
    }

    fn key(&self) -> String {
        self.stock_name.clone()
    }

    fn validate(&self, limits: &ValidationLimits) -> Result<(), RecordError> {
        check_stock_name(&self.stock_name)?;
        for (field, value) in LAG_FIELDS.into_iter().zip(self.values()) {
            check_bounded(field, value, limits.correlation_bound)?;
        }
        Ok(())
    }
}
