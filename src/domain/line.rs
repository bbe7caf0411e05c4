//! Daily sentiment observation with forward returns.

use crate::domain::error::RecordError;
use crate::domain::record::{Record, RecordKind};
use crate::domain::validation::{check_bounded, check_finite, check_stock_name, ValidationLimits};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Forward return window measured from the observation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnHorizon {
    OneDay,
    TwoDay,
    ThreeDay,
    SevenDay,
}

impl ReturnHorizon {
    pub const ALL: [ReturnHorizon; 4] = [
        ReturnHorizon::OneDay,
        ReturnHorizon::TwoDay,
        ReturnHorizon::ThreeDay,
        ReturnHorizon::SevenDay,
    ];

    pub fn days(&self) -> u32 {
        match self {
            ReturnHorizon::OneDay => 1,
            ReturnHorizon::TwoDay => 2,
            ReturnHorizon::ThreeDay => 3,
            ReturnHorizon::SevenDay => 7,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            ReturnHorizon::OneDay => "one_day_return",
            ReturnHorizon::TwoDay => "two_day_return",
            ReturnHorizon::ThreeDay => "three_day_return",
            ReturnHorizon::SevenDay => "seven_day_return",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    pub stock_name: String,
    pub date: NaiveDate,
    pub sent_score: f64,
    pub one_day_return: f64,
    pub two_day_return: f64,
    pub three_day_return: f64,
    pub seven_day_return: f64,
}

impl LineData {
    pub fn new(
        stock_name: impl Into<String>,
        date: NaiveDate,
        sent_score: f64,
        one_day_return: f64,
        two_day_return: f64,
        three_day_return: f64,
        seven_day_return: f64,
    ) -> Self {
        Self {
            stock_name: stock_name.into(),
            date,
            sent_score,
            one_day_return,
            two_day_return,
            three_day_return,
            seven_day_return,
        }
    }

    pub fn forward_return(&self, horizon: ReturnHorizon) -> f64 {
        match horizon {
            ReturnHorizon::OneDay => self.one_day_return,
            ReturnHorizon::TwoDay => self.two_day_return,
            ReturnHorizon::ThreeDay => self.three_day_return,
            ReturnHorizon::SevenDay => self.seven_day_return,
        }
    }
}

/// (stock_name, date) join key for line observations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey {
    pub stock_name: String,
    pub date: NaiveDate,
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.stock_name, self.date)
    }
}

impl Record for LineData {
    const KIND: RecordKind = RecordKind::Line;

    type Key = LineKey;

    fn stock_name(&self) -> &str {
        &self.stock_name
    }

    fn key(&self) -> LineKey {
        LineKey {
            stock_name: self.stock_name.clone(),
            date: self.date,
        }
    }

    fn validate(&self, limits: &ValidationLimits) -> Result<(), RecordError> {
        check_stock_name(&self.stock_name)?;
        match limits.sent_score_bound {
            Some(bound) => check_bounded("sent_score", self.sent_score, bound)?,
            None => check_finite("sent_score", self.sent_score)?,
        }
        for horizon in ReturnHorizon::ALL {
            check_finite(horizon.field_name(), self.forward_return(horizon))?;
        }
        Ok(())
    }
}
