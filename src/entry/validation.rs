//! Entry validation.
//!
//! # Responsibilities
//! - Reject duplicate listener ports
//! - Restrict protocols to `tcp` and `http`
//! - Require at least one non-blank service per listener
//! - Gate wildcard and multi-service routing on protocol capabilities
//!
//! # Design Decisions
//! - Expects a normalized entry; protocols are not re-cased here
//! - Scan order is fixed: all ports first, then each listener in order
//!   (protocol, service count, wildcard, cardinality, blank names)
//! - `validate` stops at the first violation; `validate_all` reports every
//!   violation in the same order

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::entry::protocol::{multi_service_family, wildcard_family, Protocol};
use crate::entry::schema::{ConfigEntry, IngressListener};
use crate::error::{ValidationError, ValidationResult};

/// Validate a normalized entry, returning the first violated invariant.
pub fn validate(entry: &ConfigEntry) -> ValidationResult<()> {
    let mut first = None;
    let _ = scan(entry, |err| {
        first = Some(err);
        ControlFlow::Break(())
    });

    match first {
        Some(err) => {
            tracing::warn!(entry = %entry.name, error = %err, "Ingress gateway entry rejected");
            Err(err)
        }
        None => {
            tracing::debug!(
                entry = %entry.name,
                listeners = entry.listeners.len(),
                "Ingress gateway entry valid"
            );
            Ok(())
        }
    }
}

/// Validate a normalized entry, returning every violated invariant.
pub fn validate_all(entry: &ConfigEntry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let _ = scan(entry, |err| {
        errors.push(err);
        ControlFlow::Continue(())
    });

    if !errors.is_empty() {
        tracing::warn!(
            entry = %entry.name,
            count = errors.len(),
            "Ingress gateway entry rejected"
        );
    }
    errors
}

fn scan<F>(entry: &ConfigEntry, mut report: F) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    let mut seen = HashSet::with_capacity(entry.listeners.len());
    for listener in &entry.listeners {
        if !seen.insert(listener.port) {
            report(ValidationError::DuplicatePort { port: listener.port })?;
        }
    }

    for listener in &entry.listeners {
        check_listener(listener, &mut report)?;
    }
    ControlFlow::Continue(())
}

fn check_listener<F>(listener: &IngressListener, report: &mut F) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    let port = listener.port;
    let protocol = Protocol::parse(&listener.protocol);
    if protocol.is_none() {
        report(ValidationError::UnsupportedProtocol {
            protocol: listener.protocol.clone(),
        })?;
    }

    if listener.services.is_empty() {
        report(ValidationError::NoServiceDeclared { port })?;
    }

    // Feature gates only apply to a known protocol.
    if let Some(caps) = protocol.map(|p| p.capabilities()) {
        if !caps.supports_wildcard && listener.services.iter().any(|s| s.name.is_wildcard()) {
            report(ValidationError::WildcardNotAllowed {
                port,
                family: wildcard_family(),
            })?;
        }

        if !caps.supports_multiple_services && listener.services.len() > 1 {
            report(ValidationError::MultipleServicesNotSupported {
                port,
                family: multi_service_family(),
            })?;
        }
    }

    for service in &listener.services {
        if service.name.is_blank() {
            report(ValidationError::BlankServiceName { port })?;
        }
    }
    ControlFlow::Continue(())
}
