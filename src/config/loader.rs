//! Override and design export file loading from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::export::DesignExport;
use crate::config::merge::ConfigOverride;

/// Load a partial configuration from a `.toml` or `.json` file.
pub fn load_override(path: &Path) -> ConfigResult<ConfigOverride> {
    load_file(path)
}

/// Load a design export document from a `.toml` or `.json` file.
pub fn load_design_export(path: &Path) -> ConfigResult<DesignExport> {
    load_file(path)
}

fn load_file<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        Some("json") => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}
