//! Entry file watcher: re-checks an ingress entry whenever it changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_entry;
use crate::config::schema::WatchConfig;
use crate::entry::ConfigEntry;

/// Monitors an entry file and forwards every version that passes validation.
pub struct EntryWatcher {
    path: PathBuf,
    poll_interval: Duration,
    update_tx: mpsc::UnboundedSender<ConfigEntry>,
}

impl EntryWatcher {
    /// Create a new EntryWatcher.
    ///
    /// Returns the watcher and a receiver for accepted entries.
    pub fn new(path: &Path, config: &WatchConfig) -> (Self, mpsc::UnboundedReceiver<ConfigEntry>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                poll_interval: Duration::from_secs(config.poll_interval_secs),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. Dropping the returned handle stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Entry file change detected, re-checking");
                        match load_entry(&path) {
                            Ok(entry) => {
                                let _ = tx.send(entry);
                            }
                            Err(e) => {
                                tracing::error!(path = ?path, error = %e, "Entry rejected");
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(self.poll_interval),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Entry watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
name = "edge"

[[listeners]]
port = 8080
protocol = "HTTP"

[[listeners.services]]
name = "web"
"#;

    const INVALID: &str = r#"
name = "edge"

[[listeners]]
port = 8080
protocol = "tcp"

[[listeners.services]]
name = "*"
"#;

    #[tokio::test]
    async fn test_forwards_only_valid_versions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.toml");
        std::fs::write(&path, VALID).unwrap();

        let (watcher, mut rx) = EntryWatcher::new(&path, &WatchConfig::default());
        let _handle = watcher.run().unwrap();

        std::fs::write(&path, INVALID).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        std::fs::write(&path, VALID.replace("8080", "9090")).unwrap();

        let entry = tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                let entry = rx.recv().await.expect("watcher channel closed");
                if entry.listeners[0].port == 9090 {
                    return entry;
                }
            }
        })
        .await
        .expect("no update received");

        assert_eq!(entry.listeners[0].protocol, "http");
    }
}
