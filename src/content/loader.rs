//! Band content loader.
//!
//! # Responsibilities
//! - Dispatch on the configured source (file, api, cms)
//! - Fetch the five file-source documents concurrently, all or nothing
//! - Fall back from api/cms to files when enabled
//! - Memoize every document by resolved location until cleared
//! - Synthesize predictable media asset paths

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;

use crate::content::cache::DocumentCache;
use crate::content::error::{ContentError, ContentResult, FetchError};
use crate::content::fetcher::{DocumentFetcher, StdFetcher};
use crate::content::source::{
    ContentConfig, ContentConfigUpdate, ContentSource, DEFAULT_CMS_URL, PUBLIC_CONTENT_PATH,
};
use crate::content::types::{
    AboutContent, BandContent, BandProfile, ContactContent, LogoAssets, MediaAssets,
    SectionBackgroundAssets, ShowsContent, SocialContent,
};
use crate::observability::metrics;

pub const PROFILE_DOCUMENT: &str = "band-profile.json";
pub const ABOUT_DOCUMENT: &str = "data/about.json";
pub const SOCIAL_DOCUMENT: &str = "data/social.json";
pub const CONTACT_DOCUMENT: &str = "data/contact.json";
pub const SHOWS_DOCUMENT: &str = "data/shows.json";

/// Number of gallery images a band directory is expected to provide.
pub const EXPECTED_GALLERY_IMAGES: usize = 4;

pub struct ContentLoader {
    config: ArcSwap<ContentConfig>,
    cache: DocumentCache,
    fetcher: Arc<dyn DocumentFetcher>,
}

impl ContentLoader {
    /// Create a loader using the default filesystem/HTTP fetcher.
    pub fn new(config: ContentConfig) -> Self {
        Self::with_fetcher(config, Arc::new(StdFetcher::new()))
    }

    pub fn with_fetcher(config: ContentConfig, fetcher: Arc<dyn DocumentFetcher>) -> Self {
        tracing::info!(
            source = %config.source,
            band_id = %config.band_id,
            content_root = %config.content_root.display(),
            "Content loader initialized"
        );
        Self {
            config: ArcSwap::from_pointee(config),
            cache: DocumentCache::new(),
            fetcher,
        }
    }

    pub fn config(&self) -> Arc<ContentConfig> {
        self.config.load_full()
    }

    pub fn source(&self) -> ContentSource {
        self.config.load().source
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Load content for `band_id` from the configured source.
    pub async fn load_band_content(&self, band_id: &str) -> ContentResult<BandContent> {
        if !is_valid_band_id(band_id) {
            return Err(ContentError::InvalidBandId(band_id.to_string()));
        }
        let config = self.config();
        match config.source {
            ContentSource::File => self.load_from_files(&config, band_id).await,
            ContentSource::Api | ContentSource::Cms => {
                self.load_from_remote(&config, config.source, band_id).await
            }
        }
    }

    /// Load content for the configured band id.
    pub async fn load_configured_band(&self) -> ContentResult<BandContent> {
        let band_id = self.config.load().band_id.clone();
        self.load_band_content(&band_id).await
    }

    async fn load_from_files(&self, config: &ContentConfig, band_id: &str) -> ContentResult<BandContent> {
        let base = config.content_root.join(band_id);
        let location = |doc: &str| document_location(&base, doc);
        let (profile_loc, about_loc, social_loc, contact_loc, shows_loc) = (
            location(PROFILE_DOCUMENT),
            location(ABOUT_DOCUMENT),
            location(SOCIAL_DOCUMENT),
            location(CONTACT_DOCUMENT),
            location(SHOWS_DOCUMENT),
        );

        let fetched = tokio::try_join!(
            self.load_document::<BandProfile>(&profile_loc),
            self.load_document::<AboutContent>(&about_loc),
            self.load_document::<SocialContent>(&social_loc),
            self.load_document::<ContactContent>(&contact_loc),
            self.load_document::<ShowsContent>(&shows_loc),
        );

        match fetched {
            Ok((profile, about, social, contact, shows)) => Ok(BandContent {
                profile,
                about,
                social,
                contact,
                shows,
            }),
            Err(source) => {
                tracing::error!(band_id = %band_id, error = %source, "Failed to load content from files");
                Err(ContentError::Load {
                    band_id: band_id.to_string(),
                    source,
                })
            }
        }
    }

    async fn load_from_remote(
        &self,
        config: &ContentConfig,
        kind: ContentSource,
        band_id: &str,
    ) -> ContentResult<BandContent> {
        let endpoint = match remote_endpoint(config, kind, band_id) {
            Ok(endpoint) => endpoint,
            Err(e) if config.fallback_to_file => {
                tracing::warn!(source = %kind, error = %e, "Remote source unusable, falling back to files");
                metrics::record_content_fallback(kind.as_str());
                return self.load_from_files(config, band_id).await;
            }
            Err(e) => return Err(e),
        };

        match self.load_document::<BandContent>(&endpoint).await {
            Ok(content) => Ok(content),
            Err(e) if config.fallback_to_file => {
                tracing::warn!(source = %kind, error = %e, "Remote source failed, falling back to files");
                metrics::record_content_fallback(kind.as_str());
                self.load_from_files(config, band_id).await
            }
            Err(source) => Err(ContentError::Remote {
                source_kind: kind,
                band_id: band_id.to_string(),
                source,
            }),
        }
    }

    async fn load_document<T: DeserializeOwned>(&self, location: &str) -> Result<T, FetchError> {
        let parse = |value| {
            serde_json::from_value(value).map_err(|source| FetchError::Parse {
                location: location.to_string(),
                source,
            })
        };

        if let Some(value) = self.cache.get(location) {
            tracing::debug!(location = %location, "Content cache hit");
            return parse(value);
        }

        let value = self.fetcher.fetch(location).await?;
        let parsed = parse(value.clone())?;
        self.cache.insert(location, value);
        Ok(parsed)
    }

    /// Predictable asset paths for `band_id`. Existence is not checked.
    pub fn load_media_assets(&self, band_id: &str) -> MediaAssets {
        let base = format!("{}/{}/assets", PUBLIC_CONTENT_PATH, band_id);
        let background = |section: &str| vec![format!("{}/backgrounds/{}/", base, section)];

        MediaAssets {
            backgrounds: SectionBackgroundAssets {
                hero: background("hero"),
                about: background("about"),
                shows: background("shows"),
                contact: background("contact"),
                gallery: background("gallery"),
            },
            gallery: gallery_images(band_id),
            videos: vec![format!("{}/videos/", base)],
            logos: LogoAssets {
                main: format!("{}/logos/main-logo.png", base),
                icon: format!("{}/logos/icon.png", base),
                favicon: format!("{}/logos/favicon.ico", base),
                light: format!("{}/logos/logo-light.png", base),
                dark: format!("{}/logos/logo-dark.png", base),
            },
        }
    }

    /// Whether the band's profile document exists under the content root.
    pub async fn content_exists(&self, band_id: &str) -> bool {
        if !is_valid_band_id(band_id) {
            return false;
        }
        let base = self.config.load().content_root.join(band_id);
        self.fetcher.exists(&document_location(&base, PROFILE_DOCUMENT)).await
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::debug!("Content cache cleared");
    }

    /// Merge `update` into the configuration. Always clears the cache.
    pub fn update_config(&self, update: &ContentConfigUpdate) {
        let next = self.config.load().merged(update);
        tracing::info!(
            source = %next.source,
            band_id = %next.band_id,
            "Content loader reconfigured"
        );
        self.config.store(Arc::new(next));
        self.clear_cache();
    }
}

impl std::fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self.config.load();
        f.debug_struct("ContentLoader")
            .field("source", &config.source)
            .field("band_id", &config.band_id)
            .field("cached_documents", &self.cache.len())
            .finish()
    }
}

/// Public gallery image paths for a band.
pub fn gallery_images(band_id: &str) -> Vec<String> {
    (1..=EXPECTED_GALLERY_IMAGES)
        .map(|i| format!("{}/{}/assets/gallery/image-{}.jpg", PUBLIC_CONTENT_PATH, band_id, i))
        .collect()
}

/// A band id is a single path segment: non-empty, no separators, no `..`.
pub fn is_valid_band_id(band_id: &str) -> bool {
    !band_id.is_empty()
        && !band_id.contains(['/', '\\', ':'])
        && !band_id.contains("..")
        && !Path::new(band_id).is_absolute()
}

fn document_location(base: &Path, document: &str) -> String {
    base.join(document).to_string_lossy().into_owned()
}

fn remote_endpoint(config: &ContentConfig, kind: ContentSource, band_id: &str) -> ContentResult<String> {
    let base = match (kind, config.api_url.as_deref()) {
        (_, Some(url)) => url,
        (ContentSource::Cms, None) => DEFAULT_CMS_URL,
        (_, None) => return Err(ContentError::ApiUrlMissing),
    };

    let endpoint = format!("{}/bands/{}", base.trim_end_matches('/'), band_id);
    url::Url::parse(&endpoint).map_err(|source| ContentError::InvalidUrl {
        url: endpoint.clone(),
        source,
    })?;
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{self, MemoryFetcher};

    fn file_config() -> ContentConfig {
        ContentConfig {
            content_root: "content".into(),
            ..ContentConfig::default()
        }
    }

    #[tokio::test]
    async fn test_file_strategy_loads_all_documents() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let loader = ContentLoader::with_fetcher(file_config(), fetcher.clone());

        let content = loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(content.profile.name, "Night Owls");
        assert_eq!(content.shows.upcoming.len(), 3);
        assert_eq!(fetcher.total_calls(), 5);
        assert_eq!(loader.cache().len(), 5);
    }

    #[tokio::test]
    async fn test_missing_document_fails_whole_load() {
        let fetcher = MemoryFetcher::with_band_files("content", "night-owls");
        fetcher.remove("content/night-owls/data/shows.json");
        let loader = ContentLoader::with_fetcher(file_config(), Arc::new(fetcher));

        let err = loader.load_band_content("night-owls").await.unwrap_err();
        assert_eq!(err.band_id(), Some("night-owls"));
        assert!(err.to_string().contains("night-owls"));
        assert!(matches!(err, ContentError::Load { .. }));
    }

    #[tokio::test]
    async fn test_cache_short_circuits_fetch() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let loader = ContentLoader::with_fetcher(file_config(), fetcher.clone());
        let profile = "content/night-owls/band-profile.json";

        loader.load_band_content("night-owls").await.unwrap();
        loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(fetcher.calls_for(profile), 1);

        loader.clear_cache();
        loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(fetcher.calls_for(profile), 2);
    }

    #[tokio::test]
    async fn test_update_config_clears_cache() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let loader = ContentLoader::with_fetcher(file_config(), fetcher.clone());
        loader.load_band_content("night-owls").await.unwrap();
        assert!(!loader.cache().is_empty());

        loader.update_config(&ContentConfigUpdate {
            fallback_to_file: Some(false),
            ..Default::default()
        });
        assert!(loader.cache().is_empty());
        assert!(!loader.config().fallback_to_file);

        loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(fetcher.calls_for("content/night-owls/band-profile.json"), 2);
    }

    #[tokio::test]
    async fn test_cms_success_uses_single_document() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert("http://cms.test/api/bands/night-owls", fixtures::band_content_json());
        let fetcher = Arc::new(fetcher);
        let config = ContentConfig {
            source: ContentSource::Cms,
            api_url: Some("http://cms.test/api/".to_string()),
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config, fetcher.clone());

        let content = loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(content.profile.id, "night-owls");
        assert_eq!(fetcher.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_cms_without_url_uses_default_base() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert(
            &format!("{}/bands/night-owls", DEFAULT_CMS_URL),
            fixtures::band_content_json(),
        );
        let config = ContentConfig {
            source: ContentSource::Cms,
            api_url: None,
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config, Arc::new(fetcher));
        assert!(loader.load_band_content("night-owls").await.is_ok());
    }

    #[tokio::test]
    async fn test_api_failure_falls_back_to_files() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let config = ContentConfig {
            source: ContentSource::Api,
            api_url: Some("http://api.test".to_string()),
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config, fetcher.clone());

        let content = loader.load_band_content("night-owls").await.unwrap();
        assert_eq!(content.profile.name, "Night Owls");
        assert_eq!(fetcher.calls_for("http://api.test/bands/night-owls"), 1);
        assert_eq!(fetcher.total_calls(), 6);
    }

    #[tokio::test]
    async fn test_api_failure_without_fallback_propagates() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let config = ContentConfig {
            source: ContentSource::Api,
            api_url: Some("http://api.test".to_string()),
            fallback_to_file: false,
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config, fetcher.clone());

        let err = loader.load_band_content("night-owls").await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::Remote { source_kind: ContentSource::Api, .. }
        ));
        assert_eq!(fetcher.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_api_without_url() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let mut config = ContentConfig {
            source: ContentSource::Api,
            api_url: None,
            fallback_to_file: false,
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config.clone(), fetcher.clone());
        assert!(matches!(
            loader.load_band_content("night-owls").await,
            Err(ContentError::ApiUrlMissing)
        ));

        config.fallback_to_file = true;
        let loader = ContentLoader::with_fetcher(config, fetcher);
        assert!(loader.load_band_content("night-owls").await.is_ok());
    }

    #[tokio::test]
    async fn test_content_exists() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let loader = ContentLoader::with_fetcher(file_config(), fetcher);
        assert!(loader.content_exists("night-owls").await);
        assert!(!loader.content_exists("unknown-band").await);
    }

    #[tokio::test]
    async fn test_band_id_cannot_escape_content_root() {
        let fetcher = Arc::new(MemoryFetcher::with_band_files("content", "night-owls"));
        let loader = ContentLoader::with_fetcher(file_config(), fetcher.clone());

        for band_id in ["../night-owls", "night-owls/../../etc", "/etc", "a\\b", "", ".."] {
            let err = loader.load_band_content(band_id).await.unwrap_err();
            assert!(matches!(err, ContentError::InvalidBandId(ref id) if id == band_id));
            assert!(!loader.content_exists(band_id).await);
        }
        assert_eq!(fetcher.total_calls(), 0);
        assert!(is_valid_band_id("night-owls"));
    }

    #[tokio::test]
    async fn test_remote_source_rejects_band_id_with_separators() {
        let fetcher = Arc::new(MemoryFetcher::new());
        let config = ContentConfig {
            source: ContentSource::Cms,
            ..file_config()
        };
        let loader = ContentLoader::with_fetcher(config, fetcher.clone());

        let err = loader.load_band_content("x/../../admin").await.unwrap_err();
        assert!(matches!(err, ContentError::InvalidBandId(_)));
        assert_eq!(fetcher.total_calls(), 0);
    }

    #[test]
    fn test_media_assets_are_predictable() {
        let loader = ContentLoader::with_fetcher(file_config(), Arc::new(MemoryFetcher::new()));
        let assets = loader.load_media_assets("night-owls");

        assert_eq!(assets.gallery.len(), EXPECTED_GALLERY_IMAGES);
        assert_eq!(
            assets.gallery[0],
            "/content/bands/night-owls/assets/gallery/image-1.jpg"
        );
        assert_eq!(
            assets.backgrounds.hero,
            vec!["/content/bands/night-owls/assets/backgrounds/hero/".to_string()]
        );
        assert_eq!(assets.logos.favicon, "/content/bands/night-owls/assets/logos/favicon.ico");
        assert_eq!(assets.videos, vec!["/content/bands/night-owls/assets/videos/".to_string()]);
    }
}
