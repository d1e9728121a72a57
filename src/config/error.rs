//! Configuration error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading overrides or resolving presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Override file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Override file is not valid TOML for the override shape.
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Override file is not valid JSON for the override shape.
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Override file extension is neither `.toml` nor `.json`.
    #[error("Unsupported override file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Preset lookup failed; names are matched exactly.
    #[error("Invalid preset name: {0}")]
    InvalidPresetName(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
