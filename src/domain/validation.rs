//! Record validation against configurable limits.
//!
//! Records are always representable; these checks are applied to decoded
//! batches before they are handed to a consumer. Failures are collected for
//! the whole batch rather than stopping at the first bad record.

use crate::domain::error::RecordError;
use crate::domain::record::Record;
use std::collections::BTreeSet;

pub const DEFAULT_CORRELATION_BOUND: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationLimits {
    /// Correlation values must lie in `[-correlation_bound, correlation_bound]`.
    pub correlation_bound: f64,
    pub max_lag: Option<i32>,
    pub sent_score_bound: Option<f64>,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            correlation_bound: DEFAULT_CORRELATION_BOUND,
            max_lag: None,
            sent_score_bound: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub index: usize,
    pub stock_name: String,
    pub error: RecordError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub checked: usize,
    pub failures: Vec<RecordFailure>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn check_stock_name(stock_name: &str) -> Result<(), RecordError> {
    let trimmed = stock_name.trim();
    if trimmed.is_empty() {
        return Err(RecordError::EmptyStockName);
    }
    if trimmed.len() != stock_name.len() {
        return Err(RecordError::PaddedStockName {
            stock_name: stock_name.to_string(),
        });
    }
    Ok(())
}

pub fn check_finite(field: &'static str, value: f64) -> Result<(), RecordError> {
    if !value.is_finite() {
        return Err(RecordError::NonFinite { field });
    }
    Ok(())
}

pub fn check_bounded(field: &'static str, value: f64, bound: f64) -> Result<(), RecordError> {
    check_finite(field, value)?;
    if value.abs() > bound {
        return Err(RecordError::OutOfBounds {
            field,
            value,
            bound,
        });
    }
    Ok(())
}

/// Validate every record and report keys seen more than once.
///
/// A duplicate is reported at the index of its second and later occurrences;
/// the first occurrence is only reported if it fails its own checks.
pub fn validate_batch<R: Record>(records: &[R], limits: &ValidationLimits) -> ValidationReport {
    let mut failures = Vec::new();
    let mut seen: BTreeSet<R::Key> = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        if let Err(error) = record.validate(limits) {
            failures.push(RecordFailure {
                index,
                stock_name: record.stock_name().to_string(),
                error,
            });
        }

        let key = record.key();
        if seen.contains(&key) {
            failures.push(RecordFailure {
                index,
                stock_name: record.stock_name().to_string(),
                error: RecordError::DuplicateKey {
                    key: key.to_string(),
                },
            });
        } else {
            seen.insert(key);
        }
    }

    tracing::debug!(
        kind = %R::KIND,
        checked = records.len(),
        failed = failures.len(),
        "validated batch"
    );

    ValidationReport {
        checked: records.len(),
        failures,
    }
}
