//! Service containment queries.
//!
//! # Design Decisions
//! - Read-only and total; invalid entries are matched as written
//! - Protocol-agnostic: a wildcard matches even on a non-http listener
//! - Wildcard matches any identity without comparing tenancy
//! - First matching listener/service wins (declaration order)

use crate::entry::schema::{ConfigEntry, ServiceSelector};
use crate::service_id::ServiceId;

/// Returns true if any listener of `entry` routes `service`.
pub fn contains_service(entry: &ConfigEntry, service: &ServiceId) -> bool {
    entry
        .listeners
        .iter()
        .flat_map(|listener| listener.services.iter())
        .any(|routed| match &routed.name {
            ServiceSelector::Wildcard => true,
            ServiceSelector::Named(name) => {
                *name == service.name && routed.tenancy.matches(&service.tenancy)
            }
        })
}
