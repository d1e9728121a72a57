//! Site configuration schema definitions.
//!
//! This module defines the complete visual and content configuration of the
//! site. Field names serialize in camelCase so hand-written override files
//! keep the same keys as the site's `band.config`.

use serde::{Deserialize, Serialize};

/// Placeholder band name shipped in the compiled-in default.
pub const BAND_NAME_PLACEHOLDER: &str = "[BAND_NAME]";

/// Placeholder tagline shipped in the compiled-in default.
pub const TAGLINE_PLACEHOLDER: &str = "[BAND_TAGLINE]";

/// Root configuration for the site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Core developer controls (palette, typography, backgrounds).
    pub core: CoreControls,

    /// Genre tuning knobs.
    pub genre: GenreControls,

    /// Band copy, contact and SEO fields.
    pub content: SiteContent,

    /// Media asset paths.
    pub media: MediaConfig,

    /// Config version for compatibility checks.
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            core: CoreControls::default(),
            genre: GenreControls::default(),
            content: SiteContent::default(),
            media: MediaConfig::default(),
            version: "1.0.0".to_string(),
        }
    }
}

// ================================
// Core controls
// ================================

/// Core developer controls.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreControls {
    pub primary_color_palette: ColorPalette,
    pub typography_pair: TypographyPair,
    pub hero_background: HeroBackground,
    pub section_background_strategy: SectionBackgrounds,
    pub animation_intensity: AnimationIntensity,
    pub color_temperature: ColorTemperature,
    pub contrast_level: ContrastLevel,
    pub border_radius_scale: BorderRadiusScale,
}

impl Default for CoreControls {
    fn default() -> Self {
        Self {
            primary_color_palette: ColorPalette::default(),
            typography_pair: TypographyPair::default(),
            hero_background: HeroBackground::default(),
            section_background_strategy: SectionBackgrounds::default(),
            animation_intensity: AnimationIntensity::Full,
            color_temperature: ColorTemperature::Neutral,
            contrast_level: ContrastLevel::Balanced,
            border_radius_scale: BorderRadiusScale::Subtle,
        }
    }
}

/// Brand colors. Values are either utility tokens (`amber-900`) or hex.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
}

impl ColorPalette {
    /// Palette entries in declaration order, keyed by field name.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "amber-900".to_string(),
            secondary: "teal-800".to_string(),
            accent: "purple-600".to_string(),
            background: "black".to_string(),
            surface: "gray-900".to_string(),
        }
    }
}

/// Heading and body font combination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyPair {
    pub heading_font: String,
    pub body_font: String,
    pub font_scale: FontScale,
}

impl Default for TypographyPair {
    fn default() -> Self {
        Self {
            heading_font: "Inter".to_string(),
            body_font: "Inter".to_string(),
            font_scale: FontScale::Balanced,
        }
    }
}

/// Hero section background.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroBackground {
    #[serde(rename = "type")]
    pub kind: HeroBackgroundType,

    /// Path to image/video or a gradient definition.
    pub source: String,

    /// Overlay darkness, 0-1.
    pub overlay_intensity: f64,
}

impl Default for HeroBackground {
    fn default() -> Self {
        Self {
            kind: HeroBackgroundType::Image,
            source: "/hero-bg.jpg".to_string(),
            overlay_intensity: 0.4,
        }
    }
}

/// Background style per main section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SectionBackgrounds {
    pub about: SectionBackground,
    pub shows: SectionBackground,
    pub gallery: SectionBackground,
    pub contact: SectionBackground,
}

impl Default for SectionBackgrounds {
    fn default() -> Self {
        Self {
            about: SectionBackground::Video,
            shows: SectionBackground::Video,
            gallery: SectionBackground::Gradient,
            contact: SectionBackground::Gradient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Compact,
    #[default]
    Balanced,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeroBackgroundType {
    #[default]
    Image,
    Video,
    Gradient,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionBackground {
    Video,
    #[default]
    Gradient,
    Image,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationIntensity {
    Minimal,
    Moderate,
    #[default]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTemperature {
    Warm,
    #[default]
    Neutral,
    Cool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Subtle,
    #[default]
    Balanced,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderRadiusScale {
    Sharp,
    #[default]
    Subtle,
    Modern,
    Rounded,
}

// ================================
// Genre controls
// ================================

/// Genre fine-tuning knobs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenreControls {
    /// Atmospheric particle density, 0-1.
    pub particle_effects_density: f64,

    /// Glow/neon intensity, 0-1.
    pub glow_intensity: f64,

    pub texture_overlays: TextureOverlay,

    /// Animation speed scaling, 0.5-2.0.
    pub motion_speed_multiplier: f64,

    pub shadow_intensity: ShadowIntensity,
    pub background_focus_effect: FocusEffect,
    pub color_saturation: ColorSaturation,
    pub layout_spacing: LayoutSpacing,
}

impl Default for GenreControls {
    fn default() -> Self {
        Self {
            particle_effects_density: 0.8,
            glow_intensity: 0.3,
            texture_overlays: TextureOverlay::Subtle,
            motion_speed_multiplier: 1.0,
            shadow_intensity: ShadowIntensity::Moderate,
            background_focus_effect: FocusEffect::Moderate,
            color_saturation: ColorSaturation::Balanced,
            layout_spacing: LayoutSpacing::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextureOverlay {
    None,
    #[default]
    Subtle,
    Moderate,
    Grungy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShadowIntensity {
    Flat,
    Subtle,
    #[default]
    Moderate,
    Dramatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusEffect {
    Sharp,
    Subtle,
    #[default]
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSaturation {
    Muted,
    #[default]
    Balanced,
    Vibrant,
    Neon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSpacing {
    Compact,
    #[default]
    Balanced,
    Spacious,
}

// ================================
// Content
// ================================

/// Band copy and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
    pub band_name: String,
    pub tagline: String,
    pub description: Descriptions,
    pub contact: ContactDetails,
    pub social: SocialLinks,
    pub seo: SeoFields,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            band_name: BAND_NAME_PLACEHOLDER.to_string(),
            tagline: TAGLINE_PLACEHOLDER.to_string(),
            description: Descriptions::default(),
            contact: ContactDetails::default(),
            social: SocialLinks::default(),
            seo: SeoFields::default(),
        }
    }
}

/// Three-tier description: meta/hero, about section, detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Descriptions {
    pub short: String,
    pub medium: String,
    pub long: String,
}

impl Default for Descriptions {
    fn default() -> Self {
        Self {
            short: "[SHORT_DESCRIPTION]".to_string(),
            medium: "[MEDIUM_DESCRIPTION]".to_string(),
            long: "[LONG_DESCRIPTION]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "contact@[BAND_DOMAIN].com".to_string(),
            phone: None,
            address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandcamp: Option<String>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: Some("https://facebook.com/[BAND_HANDLE]".to_string()),
            instagram: Some("https://instagram.com/[BAND_HANDLE]".to_string()),
            twitter: None,
            youtube: None,
            spotify: None,
            bandcamp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoFields {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

impl Default for SeoFields {
    fn default() -> Self {
        Self {
            meta_title: "[BAND_NAME] | Official Website".to_string(),
            meta_description: "[SHORT_DESCRIPTION]".to_string(),
            keywords: ["band", "music", "live", "shows"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

// ================================
// Media
// ================================

/// Media asset paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MediaConfig {
    pub hero: HeroMedia,
    pub sections: SectionMedia,
    pub gallery: GalleryMedia,
    pub logos: LogoSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroMedia {
    pub background: String,
    /// Used when the hero video fails to load.
    pub fallback_image: String,
}

impl Default for HeroMedia {
    fn default() -> Self {
        Self {
            background: "/hero-bg.jpg".to_string(),
            fallback_image: "/hero-fallback.jpg".to_string(),
        }
    }
}

/// Background videos/images per section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SectionMedia {
    pub about: Vec<String>,
    pub shows: Vec<String>,
    pub gallery: Vec<String>,
    pub contact: Vec<String>,
}

impl Default for SectionMedia {
    fn default() -> Self {
        Self {
            about: vec!["/videos/about-bg-1.mp4".to_string()],
            shows: vec!["/videos/shows-bg-1.mp4".to_string()],
            gallery: Vec::new(),
            contact: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryMedia {
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
}

impl Default for GalleryMedia {
    fn default() -> Self {
        Self {
            images: (1..=4).map(|i| format!("gallery-{}.jpg", i)).collect(),
            thumbnails: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogoSet {
    pub main: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl Default for LogoSet {
    fn default() -> Self {
        Self {
            main: "/logo.png".to_string(),
            icon: "/favicon.ico".to_string(),
            light: None,
            dark: None,
        }
    }
}
