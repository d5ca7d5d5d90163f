//! Error definitions for normalization, validation and entry loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::validation::SettingsError;

/// Invariant violations reported by entry validation.
///
/// Message text is matched by callers on substrings; keep it stable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Two listeners bind the same port.
    #[error("port {port} declared on two listeners")]
    DuplicatePort { port: u16 },

    /// Listener protocol is neither `http` nor `tcp`.
    #[error("Protocol must be either 'http' or 'tcp', '{protocol}' is an unsupported protocol.")]
    UnsupportedProtocol { protocol: String },

    /// Listener routes no services.
    #[error("No service declared for listener with port {port}")]
    NoServiceDeclared { port: u16 },

    /// Wildcard service on a protocol without host-based routing.
    #[error("Wildcard service name is only valid for protocol = '{family}' (listener on port {port})")]
    WildcardNotAllowed { port: u16, family: &'static str },

    /// More than one service on a single-upstream protocol.
    #[error("Multiple services per listener are only supported for protocol = '{family}' (listener on port {port})")]
    MultipleServicesNotSupported { port: u16, family: &'static str },

    /// Service entry without a name.
    #[error("Service name cannot be blank (listener on port {port})")]
    BlankServiceName { port: u16 },
}

/// Stable discriminator for [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    DuplicatePort,
    UnsupportedProtocol,
    NoServiceDeclared,
    WildcardNotAllowed,
    MultipleServicesNotSupported,
    BlankServiceName,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::DuplicatePort { .. } => ValidationErrorKind::DuplicatePort,
            Self::UnsupportedProtocol { .. } => ValidationErrorKind::UnsupportedProtocol,
            Self::NoServiceDeclared { .. } => ValidationErrorKind::NoServiceDeclared,
            Self::WildcardNotAllowed { .. } => ValidationErrorKind::WildcardNotAllowed,
            Self::MultipleServicesNotSupported { .. } => {
                ValidationErrorKind::MultipleServicesNotSupported
            }
            Self::BlankServiceName { .. } => ValidationErrorKind::BlankServiceName,
        }
    }
}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Canonicalization failures.
///
/// No current rule can fail; the type exists so new rules can be added
/// without changing the signature of `normalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NormalizeError {}

/// Errors from reading settings or entry files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {}", join_settings(.0))]
    Settings(Vec<SettingsError>),

    #[error("Unsupported entry file extension: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

fn join_settings(errors: &[SettingsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_offending_values() {
        assert_eq!(
            ValidationError::DuplicatePort { port: 1111 }.to_string(),
            "port 1111 declared on two listeners"
        );
        assert_eq!(
            ValidationError::UnsupportedProtocol { protocol: "asdf".into() }.to_string(),
            "Protocol must be either 'http' or 'tcp', 'asdf' is an unsupported protocol."
        );
        assert_eq!(
            ValidationError::NoServiceDeclared { port: 1111 }.to_string(),
            "No service declared for listener with port 1111"
        );
        assert_eq!(
            ValidationError::BlankServiceName { port: 8080 }.to_string(),
            "Service name cannot be blank (listener on port 8080)"
        );
    }

    #[test]
    fn test_kind() {
        let err = ValidationError::WildcardNotAllowed { port: 1, family: "http" };
        assert_eq!(err.kind(), ValidationErrorKind::WildcardNotAllowed);
    }
}
