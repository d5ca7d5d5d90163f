//! Listener protocols and the features each protocol family supports.
//!
//! # Design Decisions
//! - Feature gating reads only the capability table below
//! - Adding a protocol means adding a variant and its capability row
//! - Parsing expects canonical (lower-case) input; normalization runs first

use std::fmt;

/// Protocol assigned to a listener with no explicit protocol.
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Wire protocol a listener accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Http,
}

/// Routing features available on a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Listener may route `*` to any service.
    pub supports_wildcard: bool,
    /// Listener may route more than one service.
    pub supports_multiple_services: bool,
}

impl Protocol {
    /// All supported protocols, in the order used by error messages.
    pub const SUPPORTED: [Protocol; 2] = [Protocol::Http, Protocol::Tcp];

    /// Parse a canonical protocol string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tcp" => Some(Self::Tcp),
            "http" => Some(Self::Http),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Http => "http",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            // L4: a single upstream, no host to route on.
            Self::Tcp => Capabilities {
                supports_wildcard: false,
                supports_multiple_services: false,
            },
            Self::Http => Capabilities {
                supports_wildcard: true,
                supports_multiple_services: true,
            },
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol family quoted when a wildcard service is rejected.
pub fn wildcard_family() -> &'static str {
    family_where(|c| c.supports_wildcard)
}

/// Protocol family quoted when multiple services are rejected.
pub fn multi_service_family() -> &'static str {
    family_where(|c| c.supports_multiple_services)
}

fn family_where(pred: impl Fn(&Capabilities) -> bool) -> &'static str {
    Protocol::SUPPORTED
        .iter()
        .find(|p| pred(&p.capabilities()))
        .map(Protocol::as_str)
        .unwrap_or("none")
}
