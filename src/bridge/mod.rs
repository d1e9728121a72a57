//! Bridge between band content and the site configuration.
//!
//! # Data Flow
//! ```text
//! ContentLoader ──► BandContent ──► content_to_override ──┐
//!                                                         ├──► merged SiteConfig
//! ConfigStore ──► current SiteConfig ─────────────────────┘
//! ```
//!
//! Every failure falls back to the store's current configuration. The store
//! itself is never written.

use std::sync::Arc;

use serde::Serialize;

use crate::config::schema::{
    AnimationIntensity, ColorPalette, ContactDetails, CoreControls, Descriptions, GalleryMedia,
    GenreControls, HeroBackground, HeroBackgroundType, HeroMedia, SeoFields, SiteConfig, SiteContent,
    SocialLinks, TypographyPair, SectionBackgrounds,
};
use crate::config::{ConfigOverride, ConfigStore, ContentOverride, CoreOverride, GenreOverride, MediaOverride};
use crate::content::loader::gallery_images;
use crate::content::source::{ContentSource, ContentConfigUpdate, ENV_USE_CMS, PUBLIC_CONTENT_PATH};
use crate::content::{BandContent, ContentLoader, ContentResult};

pub const ENV_APP_ENV: &str = "BANDSITE_ENV";

/// Particle density used when the band theme enables particles.
pub const THEME_PARTICLE_DENSITY: f64 = 0.8;
/// Glow intensity used when the band theme enables glow.
pub const THEME_GLOW_INTENSITY: f64 = 0.3;

/// Which system produced a unified configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    /// Band content loaded through the cms source.
    Cms,
    /// Band content loaded from files.
    New,
    /// Store configuration only.
    Old,
}

#[derive(Debug, Clone)]
pub struct UnifiedContent {
    pub source: ContentOrigin,
    pub config: Arc<SiteConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeSettings {
    pub cms_enabled: bool,
}

impl BridgeSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// CMS mode is on when `BANDSITE_USE_CMS=true` or `BANDSITE_ENV=development`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cms_enabled = lookup(ENV_USE_CMS).as_deref() == Some("true")
            || lookup(ENV_APP_ENV).as_deref() == Some("development");
        Self { cms_enabled }
    }
}

/// Media paths for rendering, from band content when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaPaths {
    pub hero: String,
    pub gallery: Vec<String>,
    pub about: Vec<String>,
    pub shows: Vec<String>,
}

pub struct ContentBridge {
    store: ConfigStore,
    loader: Arc<ContentLoader>,
    settings: BridgeSettings,
}

impl ContentBridge {
    pub fn new(store: ConfigStore, loader: Arc<ContentLoader>, settings: BridgeSettings) -> Self {
        Self {
            store,
            loader,
            settings,
        }
    }

    pub fn settings(&self) -> BridgeSettings {
        self.settings
    }

    /// Resolve the configuration for `band_id`. Never fails.
    pub async fn unified_content(&self, band_id: &str) -> UnifiedContent {
        let base = self.store.get();

        match self.new_content(band_id).await {
            Ok(Some(content)) => {
                let ovr = content_to_override(&content);
                let source = if self.settings.cms_enabled {
                    ContentOrigin::Cms
                } else {
                    ContentOrigin::New
                };
                tracing::info!(band_id = %band_id, source = ?source, "Resolved configuration from band content");
                UnifiedContent {
                    source,
                    config: Arc::new(base.merged(&ovr)),
                }
            }
            Ok(None) => UnifiedContent {
                source: ContentOrigin::Old,
                config: base,
            },
            Err(e) => {
                tracing::warn!(band_id = %band_id, error = %e, "Failed to load band content, using site configuration");
                UnifiedContent {
                    source: ContentOrigin::Old,
                    config: base,
                }
            }
        }
    }

    pub async fn band_name(&self, band_id: &str) -> String {
        self.unified_content(band_id).await.config.content.band_name.clone()
    }

    pub async fn media_paths(&self, band_id: &str) -> MediaPaths {
        match self.new_content(band_id).await {
            Ok(Some(content)) => {
                let id = &content.profile.id;
                let base = format!("{}/{}/assets", PUBLIC_CONTENT_PATH, id);
                MediaPaths {
                    hero: format!("{}/backgrounds/hero/main.jpg", base),
                    gallery: gallery_images(id),
                    about: vec![format!("{}/backgrounds/about/bg-1.mp4", base)],
                    shows: vec![format!("{}/backgrounds/shows/bg-1.mp4", base)],
                }
            }
            outcome => {
                if let Err(e) = outcome {
                    tracing::warn!(band_id = %band_id, error = %e, "Failed to load band content, using site media");
                }
                let config = self.store.get();
                MediaPaths {
                    hero: config.media.hero.background.clone(),
                    gallery: config
                        .media
                        .gallery
                        .images
                        .iter()
                        .map(|img| format!("/gallery/{}", img))
                        .collect(),
                    about: config.media.sections.about.clone(),
                    shows: config.media.sections.shows.clone(),
                }
            }
        }
    }

    /// `Ok(None)` when the band has no content in any enabled source.
    async fn new_content(&self, band_id: &str) -> ContentResult<Option<BandContent>> {
        if self.settings.cms_enabled {
            self.ensure_source(ContentSource::Cms);
            match self.loader.load_band_content(band_id).await {
                Ok(content) => return Ok(Some(content)),
                Err(e) => tracing::debug!(band_id = %band_id, error = %e, "CMS content unavailable"),
            }
            if !self.loader.content_exists(band_id).await {
                return Ok(None);
            }
            return self.loader.load_band_content(band_id).await.map(Some);
        }

        if !self.loader.content_exists(band_id).await {
            return Ok(None);
        }
        self.ensure_source(ContentSource::File);
        self.loader.load_band_content(band_id).await.map(Some)
    }

    fn ensure_source(&self, source: ContentSource) {
        if self.loader.source() != source {
            self.loader.update_config(&ContentConfigUpdate::source(source));
        }
    }
}

/// Convert band content into a partial site configuration.
pub fn content_to_override(content: &BandContent) -> ConfigOverride {
    let BandContent {
        profile,
        about,
        social,
        contact,
        ..
    } = content;
    let theme = &profile.theme;
    let assets = format!("{}/{}/assets", PUBLIC_CONTENT_PATH, profile.id);
    let hero_image = format!("{}/backgrounds/hero/main.jpg", assets);
    let social_url = |name: &str| social.platforms.get(name).map(|p| p.url.clone());
    let or_default = |value: &str, default: &str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };

    let palette = ColorPalette {
        primary: or_default(&theme.primary_color, "amber-900"),
        secondary: or_default(&theme.secondary_color, "teal-800"),
        accent: or_default(&theme.accent_color, "purple-600"),
        ..ColorPalette::default()
    };

    let core = CoreControls {
        primary_color_palette: palette,
        typography_pair: TypographyPair::default(),
        hero_background: HeroBackground {
            kind: HeroBackgroundType::Image,
            source: hero_image.clone(),
            overlay_intensity: 0.4,
        },
        section_background_strategy: SectionBackgrounds::default(),
        animation_intensity: theme.animation_intensity.unwrap_or(AnimationIntensity::Full),
        ..CoreControls::default()
    };

    let genre = GenreControls {
        particle_effects_density: if theme.particle_effects { THEME_PARTICLE_DENSITY } else { 0.0 },
        glow_intensity: if theme.glow_effects { THEME_GLOW_INTENSITY } else { 0.0 },
        ..GenreControls::default()
    };

    let site_content = SiteContent {
        band_name: profile.name.clone(),
        tagline: profile.tagline.clone(),
        description: Descriptions {
            short: about.descriptions.short.clone(),
            medium: about.descriptions.medium.clone(),
            long: about.descriptions.long.clone(),
        },
        contact: ContactDetails {
            email: contact.primary.email.clone(),
            phone: contact.primary.phone.clone(),
            address: contact.office.as_ref().map(|o| o.address.clone()),
        },
        social: SocialLinks {
            facebook: social_url("facebook"),
            instagram: social_url("instagram"),
            twitter: social_url("twitter"),
            youtube: social_url("youtube"),
            spotify: social_url("spotify"),
            bandcamp: social_url("bandcamp"),
        },
        seo: SeoFields {
            meta_title: profile.seo.meta_title.clone(),
            meta_description: profile.seo.meta_description.clone(),
            keywords: profile.seo.keywords.clone(),
        },
    };

    let content_override = ContentOverride {
        band_name: Some(site_content.band_name),
        tagline: Some(site_content.tagline),
        description: Some(site_content.description),
        contact: Some(site_content.contact),
        social: Some(site_content.social),
        seo: Some(site_content.seo),
    };

    ConfigOverride {
        core: Some(CoreOverride::from(core)),
        genre: Some(GenreOverride::from(genre)),
        content: Some(content_override),
        media: Some(MediaOverride {
            hero: Some(HeroMedia {
                background: hero_image,
                fallback_image: format!("{}/backgrounds/hero/fallback.jpg", assets),
            }),
            gallery: Some(GalleryMedia {
                images: gallery_images(&profile.id),
                thumbnails: None,
            }),
            ..Default::default()
        }),
        version: None,
    }
}
