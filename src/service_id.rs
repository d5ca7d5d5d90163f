//! Service identity used by containment queries.
//!
//! # Design Decisions
//! - Name comparison is exact (service names are case-sensitive)
//! - Tenancy qualifiers default to `"default"` when unset or empty
//! - Tenancy qualifiers compare case-insensitively

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value used for an unset namespace or partition.
pub const DEFAULT_TENANCY: &str = "default";

/// Namespace/partition scoping carried by entries and services.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TenancyScope {
    #[serde(alias = "Namespace", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(alias = "Partition", skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

impl TenancyScope {
    pub fn new(namespace: impl Into<String>, partition: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            partition: Some(partition.into()),
        }
    }

    /// Namespace with the default substituted.
    pub fn namespace_or_default(&self) -> &str {
        or_default(self.namespace.as_deref())
    }

    /// Partition with the default substituted.
    pub fn partition_or_default(&self) -> &str {
        or_default(self.partition.as_deref())
    }

    /// Returns true if both scopes resolve to the same namespace and partition.
    pub fn matches(&self, other: &TenancyScope) -> bool {
        self.namespace_or_default()
            .eq_ignore_ascii_case(other.namespace_or_default())
            && self
                .partition_or_default()
                .eq_ignore_ascii_case(other.partition_or_default())
    }
}

fn or_default(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_TENANCY,
    }
}

/// A service name qualified by its tenancy scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceId {
    pub name: String,
    pub tenancy: TenancyScope,
}

impl ServiceId {
    /// Build an identity; `None` places the service in the default scope.
    pub fn new(name: impl Into<String>, tenancy: Option<&TenancyScope>) -> Self {
        Self {
            name: name.into(),
            tenancy: tenancy.cloned().unwrap_or_default(),
        }
    }

    /// Returns true if `other` names the same service in the same scope.
    pub fn matches(&self, other: &ServiceId) -> bool {
        self.name == other.name && self.tenancy.matches(&other.tenancy)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.tenancy.partition_or_default(),
            self.tenancy.namespace_or_default(),
            self.name
        )
    }
}
