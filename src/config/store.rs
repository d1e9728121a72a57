//! Current resolved configuration.
//!
//! [`ConfigStore`] is a cheap-to-clone handle; clones share the same current
//! configuration. Readers get an immutable snapshot (`Arc<SiteConfig>`) and
//! every write publishes a complete new snapshot, so a reader never observes
//! a partially merged configuration.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::error::ConfigResult;
use crate::config::loader::load_override;
use crate::config::merge::ConfigOverride;
use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationReport};
use crate::presets::{self, Genre, GenrePreset};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    current: Arc<ArcSwap<SiteConfig>>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a store holding the compiled-in default.
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Current configuration snapshot.
    pub fn get(&self) -> Arc<SiteConfig> {
        self.current.load_full()
    }

    /// Resolve the default merged with `ovr` and make it current.
    pub fn load(&self, ovr: Option<&ConfigOverride>) -> Arc<SiteConfig> {
        let base = SiteConfig::default();
        let resolved = match ovr {
            Some(ovr) => base.merged(ovr),
            None => base,
        };

        tracing::info!(
            version = %resolved.version,
            has_override = ovr.is_some(),
            "Site configuration loaded"
        );
        self.publish(resolved)
    }

    /// Load an override file and resolve it over the default.
    ///
    /// Any read or parse failure resets the store to the compiled-in default.
    pub fn load_from_path(&self, path: &Path) -> Arc<SiteConfig> {
        match load_override(path) {
            Ok(ovr) => self.load(Some(&ovr)),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load configuration override, using defaults"
                );
                self.publish(SiteConfig::default())
            }
        }
    }

    /// Replace the current configuration wholesale.
    pub fn replace(&self, config: SiteConfig) -> Arc<SiteConfig> {
        self.publish(config)
    }

    /// Apply a preset by exact name. Unknown names leave the store untouched.
    pub fn apply_preset(&self, name: &str) -> ConfigResult<Arc<SiteConfig>> {
        let preset = presets::lookup(name)?;
        Ok(self.apply(name, &preset))
    }

    pub fn apply_genre(&self, genre: Genre) -> Arc<SiteConfig> {
        self.apply(genre.key(), &genre.preset())
    }

    /// Validate the current configuration.
    pub fn validate(&self) -> ValidationReport {
        validate_config(&self.get())
    }

    fn apply(&self, name: &str, preset: &GenrePreset) -> Arc<SiteConfig> {
        let current = self.get();
        let next = SiteConfig {
            genre: preset.genre.merged_over(&current.genre),
            ..(*current).clone()
        };
        tracing::info!(preset = %name, "Genre preset applied");
        self.publish(next)
    }

    fn publish(&self, config: SiteConfig) -> Arc<SiteConfig> {
        let config = Arc::new(config);
        self.current.store(config.clone());
        config
    }
}
