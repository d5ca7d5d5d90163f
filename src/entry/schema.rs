//! Ingress gateway config entry definitions.
//!
//! All types derive Serde traits so operator input can be loaded from TOML or
//! JSON. Field names are snake_case; the PascalCase spelling used by the
//! config-entry API is accepted as an alias.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::service_id::{ServiceId, TenancyScope};

/// Kind discriminator for ingress gateway entries.
pub const INGRESS_GATEWAY: &str = "ingress-gateway";

/// Service name that matches any service.
pub const WILDCARD_SPECIFIER: &str = "*";

/// An ingress gateway resource: listener ports and the services they route to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigEntry {
    #[serde(alias = "Kind")]
    pub kind: String,

    /// Unique name within the administrative scope.
    #[serde(alias = "Name")]
    pub name: String,

    /// Listeners in declaration order.
    #[serde(alias = "Listeners")]
    pub listeners: Vec<IngressListener>,

    /// Tenancy of the entry itself.
    #[serde(flatten)]
    pub meta: TenancyScope,
}

impl Default for ConfigEntry {
    fn default() -> Self {
        Self {
            kind: INGRESS_GATEWAY.to_string(),
            name: String::new(),
            listeners: Vec::new(),
            meta: TenancyScope::default(),
        }
    }
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, listeners: Vec<IngressListener>) -> Self {
        Self {
            name: name.into(),
            listeners,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tenancy(&self) -> &TenancyScope {
        &self.meta
    }

    /// Distinct named services routed by any listener, in declaration order.
    ///
    /// Wildcard entries are skipped; they do not name a concrete service.
    pub fn declared_services(&self) -> Vec<ServiceId> {
        let mut out: Vec<ServiceId> = Vec::new();
        for id in self
            .listeners
            .iter()
            .flat_map(|l| l.services.iter())
            .filter_map(IngressService::to_service_id)
        {
            if !out.iter().any(|seen| seen.matches(&id)) {
                out.push(id);
            }
        }
        out
    }
}

/// A bound port, its protocol and the services routed through it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngressListener {
    #[serde(alias = "Port")]
    pub port: u16,

    /// Protocol string; canonical form is lower-case `tcp` or `http`.
    #[serde(alias = "Protocol")]
    pub protocol: String,

    #[serde(alias = "Services")]
    pub services: Vec<IngressService>,
}

impl IngressListener {
    pub fn new(port: u16, protocol: impl Into<String>, services: Vec<IngressService>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
            services,
        }
    }
}

/// A service routed by a listener.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngressService {
    #[serde(alias = "Name")]
    pub name: ServiceSelector,

    /// Host names routed to this service. Carried through untouched.
    #[serde(alias = "Hosts", skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    #[serde(flatten)]
    pub tenancy: TenancyScope,
}

impl IngressService {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: ServiceSelector::from(name.into()),
            ..Default::default()
        }
    }

    pub fn wildcard() -> Self {
        Self {
            name: ServiceSelector::Wildcard,
            ..Default::default()
        }
    }

    /// Identity of the named service; `None` for the wildcard.
    pub fn to_service_id(&self) -> Option<ServiceId> {
        match &self.name {
            ServiceSelector::Named(name) => Some(ServiceId::new(name.clone(), Some(&self.tenancy))),
            ServiceSelector::Wildcard => None,
        }
    }
}

/// Service name as written by the operator.
///
/// Serialized as a plain string; `"*"` is the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceSelector {
    Named(String),
    Wildcard,
}

impl ServiceSelector {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Named(name) if name.is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Wildcard => WILDCARD_SPECIFIER,
        }
    }
}

impl Default for ServiceSelector {
    fn default() -> Self {
        Self::Named(String::new())
    }
}

impl From<String> for ServiceSelector {
    fn from(value: String) -> Self {
        if value == WILDCARD_SPECIFIER {
            Self::Wildcard
        } else {
            Self::Named(value)
        }
    }
}

impl From<&str> for ServiceSelector {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ServiceSelector> for String {
    fn from(value: ServiceSelector) -> Self {
        match value {
            ServiceSelector::Named(name) => name,
            ServiceSelector::Wildcard => WILDCARD_SPECIFIER.to_string(),
        }
    }
}

impl fmt::Display for ServiceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
