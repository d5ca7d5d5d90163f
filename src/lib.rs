//! Ingress gateway config entry: normalization, validation and service matching.

pub mod config;
pub mod entry;
pub mod error;
pub mod observability;
pub mod service_id;

pub use entry::{ConfigEntry, IngressListener, IngressService, Protocol, ServiceSelector};
pub use error::{LoadError, NormalizeError, ValidationError, ValidationErrorKind};
pub use service_id::{ServiceId, TenancyScope};
