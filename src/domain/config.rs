//! Validation limits and output options read from configuration.
//!
//! ```ini
//! [validation]
//! correlation_bound = 1.0
//! max_lag = 5
//! sent_score_bound = 1.0
//!
//! [output]
//! pretty_json = true
//! ```

use crate::domain::error::StocksentError;
use crate::domain::validation::{ValidationLimits, DEFAULT_CORRELATION_BOUND};
use crate::ports::config_port::ConfigPort;
use std::str::FromStr;

const VALIDATION: &str = "validation";
const OUTPUT: &str = "output";

pub fn load_validation_limits(config: &dyn ConfigPort) -> Result<ValidationLimits, StocksentError> {
    let correlation_bound = parse_optional::<f64>(config, VALIDATION, "correlation_bound")?
        .unwrap_or(DEFAULT_CORRELATION_BOUND);
    require_positive_finite("correlation_bound", correlation_bound)?;

    let max_lag = parse_optional::<i32>(config, VALIDATION, "max_lag")?;
    if let Some(max) = max_lag {
        if max < 0 {
            return Err(invalid("max_lag", "max_lag must be non-negative"));
        }
    }

    let sent_score_bound = parse_optional::<f64>(config, VALIDATION, "sent_score_bound")?;
    if let Some(bound) = sent_score_bound {
        require_positive_finite("sent_score_bound", bound)?;
    }

    Ok(ValidationLimits {
        correlation_bound,
        max_lag,
        sent_score_bound,
    })
}

pub fn pretty_json(config: &dyn ConfigPort) -> bool {
    config.get_bool(OUTPUT, "pretty_json", false)
}

fn parse_optional<T: FromStr>(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<T>, StocksentError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(|_| StocksentError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("cannot parse {:?}", s),
        }),
    }
}

fn require_positive_finite(key: &str, value: f64) -> Result<(), StocksentError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(key, &format!("{} must be a positive finite number", key)));
    }
    Ok(())
}

fn invalid(key: &str, reason: &str) -> StocksentError {
    StocksentError::ConfigInvalid {
        section: VALIDATION.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
