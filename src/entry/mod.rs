//! Ingress gateway config entry subsystem.
//!
//! # Data Flow
//! ```text
//! operator input (deserialized)
//!     → normalize.rs (lower-case protocols, default to tcp)
//!     → validation.rs (ports, protocols, service rules)
//!     → ConfigEntry (canonical, handed to storage)
//!
//! At query time:
//!     ConfigEntry + ServiceId
//!     → matcher.rs (wildcard or exact name within tenancy)
//!     → bool
//! ```
//!
//! # Design Decisions
//! - Normalize mutates once; everything else is read-only
//! - Protocol features come from one capability table (protocol.rs)
//! - The wildcard is a selector variant, `"*"` only at the serde boundary

pub mod matcher;
pub mod normalize;
pub mod protocol;
pub mod schema;
pub mod validation;

pub use protocol::{Capabilities, Protocol};
pub use schema::{
    ConfigEntry, IngressListener, IngressService, ServiceSelector, INGRESS_GATEWAY,
    WILDCARD_SPECIFIER,
};

use crate::error::{NormalizeError, ValidationError};
use crate::service_id::ServiceId;

impl ConfigEntry {
    /// See [`normalize::normalize`].
    pub fn normalize(&mut self) -> Result<(), NormalizeError> {
        normalize::normalize(self)
    }

    /// See [`validation::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(self)
    }

    /// See [`validation::validate_all`].
    pub fn validate_all(&self) -> Vec<ValidationError> {
        validation::validate_all(self)
    }

    /// See [`matcher::contains_service`].
    pub fn contains_service(&self, service: &ServiceId) -> bool {
        matcher::contains_service(self, service)
    }
}
