//! Configuration validation.
//!
//! Validates config fields before any input is read.

use crate::domain::basket::parse_symbols;
use crate::domain::error::CorrelationError;
use crate::ports::config_port::ConfigPort;

pub fn validate_ranking_config(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    validate_top_n(config)?;
    validate_input_path(config)?;
    Ok(())
}

pub fn validate_source_config(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    validate_period(config)?;
    validate_symbols(config)?;
    Ok(())
}

fn validate_top_n(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    let value = config.get_int("ranking", "top_n", 1);
    if value < 1 {
        return Err(CorrelationError::ConfigInvalid {
            section: "ranking".to_string(),
            key: "top_n".to_string(),
            reason: "top_n must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_input_path(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    match config.get_string("input", "path") {
        Some(s) if s.trim().is_empty() => Err(CorrelationError::ConfigInvalid {
            section: "input".to_string(),
            key: "path".to_string(),
            reason: "path must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_period(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    let value = config.get_int("source", "period", 1);
    if value < 1 || value > i64::from(u32::MAX) {
        return Err(CorrelationError::ConfigInvalid {
            section: "source".to_string(),
            key: "period".to_string(),
            reason: "period must be a positive number of bars".to_string(),
        });
    }
    Ok(())
}

fn validate_symbols(config: &dyn ConfigPort) -> Result<(), CorrelationError> {
    if let Some(symbols) = config.get_string("source", "symbols") {
        parse_symbols(&symbols).map_err(|e| CorrelationError::ConfigInvalid {
            section: "source".to_string(),
            key: "symbols".to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
