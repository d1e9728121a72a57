//! Shared handles for the configuration store and content loader.

use std::sync::{Arc, OnceLock};

use crate::bridge::{BridgeSettings, ContentBridge};
use crate::config::ConfigStore;
use crate::content::{ContentConfig, ContentConfigUpdate, ContentLoader, DocumentFetcher, StdFetcher};

/// One store and at most one content loader per site.
pub struct SiteContext {
    store: ConfigStore,
    content_config: ContentConfig,
    bridge_settings: BridgeSettings,
    fetcher: Arc<dyn DocumentFetcher>,
    loader: OnceLock<Arc<ContentLoader>>,
}

impl SiteContext {
    pub fn new(store: ConfigStore, content_config: ContentConfig, bridge_settings: BridgeSettings) -> Self {
        Self::with_fetcher(store, content_config, bridge_settings, Arc::new(StdFetcher::new()))
    }

    /// Build from the process environment with a default store.
    pub fn from_env() -> Self {
        Self::new(ConfigStore::new(), ContentConfig::from_env(), BridgeSettings::from_env())
    }

    pub fn with_fetcher(
        store: ConfigStore,
        content_config: ContentConfig,
        bridge_settings: BridgeSettings,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> Self {
        Self {
            store,
            content_config,
            bridge_settings,
            fetcher,
            loader: OnceLock::new(),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The shared loader. The first call constructs it with `update` applied;
    /// later calls reconfigure the same instance when `update` is non-empty.
    pub fn content_loader(&self, update: Option<&ContentConfigUpdate>) -> Arc<ContentLoader> {
        let mut created = false;
        let loader = self.loader.get_or_init(|| {
            created = true;
            let config = match update {
                Some(update) => self.content_config.merged(update),
                None => self.content_config.clone(),
            };
            Arc::new(ContentLoader::with_fetcher(config, self.fetcher.clone()))
        });

        if !created {
            if let Some(update) = update.filter(|u| !u.is_empty()) {
                loader.update_config(update);
            }
        }
        loader.clone()
    }

    pub fn bridge(&self) -> ContentBridge {
        ContentBridge::new(self.store.clone(), self.content_loader(None), self.bridge_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::MemoryFetcher;
    use crate::content::ContentSource;

    fn context() -> SiteContext {
        SiteContext::with_fetcher(
            ConfigStore::new(),
            ContentConfig::default(),
            BridgeSettings::default(),
            Arc::new(MemoryFetcher::new()),
        )
    }

    #[test]
    fn test_loader_is_constructed_once() {
        let ctx = context();
        let first = ctx.content_loader(Some(&ContentConfigUpdate::source(ContentSource::Api)));
        assert_eq!(first.source(), ContentSource::Api);

        let second = ctx.content_loader(None);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.source(), ContentSource::Api);
    }

    #[test]
    fn test_later_update_reconfigures_shared_loader() {
        let ctx = context();
        let loader = ctx.content_loader(None);
        assert_eq!(loader.source(), ContentSource::File);

        let again = ctx.content_loader(Some(&ContentConfigUpdate {
            band_id: Some("night-owls".to_string()),
            ..Default::default()
        }));
        assert!(Arc::ptr_eq(&loader, &again));
        assert_eq!(loader.config().band_id, "night-owls");
    }

    #[test]
    fn test_bridge_shares_store_and_loader() {
        let ctx = context();
        let loader = ctx.content_loader(None);
        let _bridge = ctx.bridge();
        assert!(Arc::ptr_eq(&loader, &ctx.content_loader(None)));
    }
}
