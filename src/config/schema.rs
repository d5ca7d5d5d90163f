//! Checker settings definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root settings for the entry checker.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckerConfig {
    /// Log output settings.
    pub logging: LoggingConfig,

    /// How validation failures are reported.
    pub validation: ValidationConfig,

    /// File watch settings.
    pub watch: WatchConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for terminals.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Validation reporting configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    pub report: ReportMode,
}

/// Whether to stop at the first violation or list every violation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    #[default]
    FirstError,
    AllErrors,
}

/// File watcher configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WatchConfig {
    /// Poll interval in seconds for backends without native notifications.
    pub poll_interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CheckerConfig = toml::from_str("").unwrap();
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.validation.report, ReportMode::FirstError);
        assert_eq!(config.watch.poll_interval_secs, 2);
    }

    #[test]
    fn test_partial_file() {
        let config: CheckerConfig = toml::from_str(
            r#"
            [logging]
            format = "json"

            [validation]
            report = "all_errors"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.validation.report, ReportMode::AllErrors);
    }
}
