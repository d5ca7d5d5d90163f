//! Checker settings validation.
//!
//! # Design Decisions
//! - Returns all settings errors, not just first
//! - Pure function: CheckerConfig → Result<(), Vec<SettingsError>>

use std::str::FromStr;

use thiserror::Error;

use crate::config::schema::CheckerConfig;

/// A semantic problem in the checker settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("logging.level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("watch.poll_interval_secs must be greater than 0")]
    ZeroPollInterval,
}

/// Check settings values that serde cannot express.
pub fn validate_config(config: &CheckerConfig) -> Result<(), Vec<SettingsError>> {
    let mut errors = Vec::new();

    if tracing::Level::from_str(&config.logging.level).is_err() {
        errors.push(SettingsError::InvalidLogLevel(config.logging.level.clone()));
    }

    if config.watch.poll_interval_secs == 0 {
        errors.push(SettingsError::ZeroPollInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
