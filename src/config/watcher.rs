//! Override file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::schema::SiteConfig;
use crate::config::store::ConfigStore;

/// Reloads an override file into a [`ConfigStore`] whenever it changes.
pub struct OverrideWatcher {
    path: PathBuf,
    store: ConfigStore,
    update_tx: mpsc::UnboundedSender<Arc<SiteConfig>>,
}

impl OverrideWatcher {
    /// Create a new watcher.
    ///
    /// Returns the watcher and a receiver that yields each newly resolved
    /// configuration after it has been published to the store.
    pub fn new(path: &Path, store: ConfigStore) -> (Self, mpsc::UnboundedReceiver<Arc<SiteConfig>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                store,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let store = self.store.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = %path.display(), "Override file change detected, reloading");
                        let resolved = store.load_from_path(&path);
                        let _ = tx.send(resolved);
                    }
                }
                Err(e) => tracing::error!(error = %e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Override watcher started");
        Ok(watcher)
    }
}
