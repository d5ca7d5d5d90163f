//! Shared helpers for integration tests.

use std::path::PathBuf;

use ingress_gateway_entry::{ConfigEntry, IngressListener, IngressService};
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
#[allow(dead_code)]
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Listener routing the named services (`"*"` is the wildcard).
#[allow(dead_code)]
pub fn listener(port: u16, protocol: &str, services: &[&str]) -> IngressListener {
    IngressListener::new(
        port,
        protocol,
        services.iter().map(|s| IngressService::named(*s)).collect(),
    )
}

#[allow(dead_code)]
pub fn entry(listeners: Vec<IngressListener>) -> ConfigEntry {
    ConfigEntry::new("ingress-web", listeners)
}

/// Case-insensitive substring assertion on an error message.
#[allow(dead_code)]
pub fn assert_contains_lower(haystack: &str, needle: &str) {
    assert!(
        haystack.to_lowercase().contains(&needle.to_lowercase()),
        "{haystack:?} does not contain {needle:?}"
    );
}
