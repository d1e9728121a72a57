//! Content source selection and loader configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BAND_ID: &str = "template-band";
pub const DEFAULT_CMS_URL: &str = "http://localhost:3002/api";
pub const DEFAULT_CONTENT_ROOT: &str = "public/content/bands";

/// Public URL prefix under which band content is served to browsers.
pub const PUBLIC_CONTENT_PATH: &str = "/content/bands";

pub const ENV_CONTENT_SOURCE: &str = "BANDSITE_CONTENT_SOURCE";
pub const ENV_USE_CMS: &str = "BANDSITE_USE_CMS";
pub const ENV_BAND_ID: &str = "BANDSITE_BAND_ID";
pub const ENV_CMS_API_URL: &str = "BANDSITE_CMS_API_URL";
pub const ENV_CONTENT_ROOT: &str = "BANDSITE_CONTENT_ROOT";
pub const ENV_FALLBACK_TO_FILE: &str = "BANDSITE_FALLBACK_TO_FILE";

/// Where band content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    #[default]
    File,
    Api,
    Cms,
}

impl ContentSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentSource::File => "file",
            ContentSource::Api => "api",
            ContentSource::Cms => "cms",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ContentSource::File),
            "api" => Ok(ContentSource::Api),
            "cms" => Ok(ContentSource::Cms),
            other => Err(format!("unknown content source '{}' (expected file, api or cms)", other)),
        }
    }
}

/// Content loader configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub source: ContentSource,
    pub band_id: String,
    /// Base URL for the api and cms sources.
    pub api_url: Option<String>,
    /// Retry through the file source when api/cms fails.
    pub fallback_to_file: bool,
    /// Filesystem directory holding one subdirectory per band.
    pub content_root: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::File,
            band_id: DEFAULT_BAND_ID.to_string(),
            api_url: Some(DEFAULT_CMS_URL.to_string()),
            fallback_to_file: true,
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
        }
    }
}

impl ContentConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an environment-like lookup. Unset or unparsable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = lookup(ENV_CONTENT_SOURCE).and_then(|raw| match raw.parse() {
            Ok(source) => Some(source),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring {}", ENV_CONTENT_SOURCE);
                None
            }
        });
        config.source = match explicit {
            Some(source) => source,
            None if lookup(ENV_USE_CMS).as_deref() == Some("true") => ContentSource::Cms,
            None => ContentSource::File,
        };

        if let Some(band_id) = lookup(ENV_BAND_ID).filter(|v| !v.is_empty()) {
            config.band_id = band_id;
        }
        if let Some(url) = lookup(ENV_CMS_API_URL).filter(|v| !v.is_empty()) {
            config.api_url = Some(url);
        }
        if let Some(root) = lookup(ENV_CONTENT_ROOT).filter(|v| !v.is_empty()) {
            config.content_root = PathBuf::from(root);
        }
        if let Some(flag) = lookup(ENV_FALLBACK_TO_FILE) {
            config.fallback_to_file = flag != "false";
        }

        config
    }

    /// Apply the fields present in `update`.
    pub fn merged(&self, update: &ContentConfigUpdate) -> Self {
        let mut out = self.clone();
        if let Some(source) = update.source {
            out.source = source;
        }
        if let Some(band_id) = &update.band_id {
            out.band_id = band_id.clone();
        }
        if let Some(api_url) = &update.api_url {
            out.api_url = api_url.clone();
        }
        if let Some(fallback) = update.fallback_to_file {
            out.fallback_to_file = fallback;
        }
        if let Some(root) = &update.content_root {
            out.content_root = root.clone();
        }
        out
    }
}

/// Partial loader configuration. `api_url: Some(None)` clears the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentConfigUpdate {
    pub source: Option<ContentSource>,
    pub band_id: Option<String>,
    pub api_url: Option<Option<String>>,
    pub fallback_to_file: Option<bool>,
    pub content_root: Option<PathBuf>,
}

impl ContentConfigUpdate {
    pub fn source(source: ContentSource) -> Self {
        Self {
            source: Some(source),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
