//! Partial configuration and the per-subtree merge law.
//!
//! A [`ConfigOverride`] mirrors [`SiteConfig`] with every subtree field made
//! optional. Merging is exactly one level deep: a field present in the
//! override replaces the base field wholesale (nested structs and arrays
//! included), an absent field keeps the base value.

use serde::{Deserialize, Serialize};

use crate::config::schema::*;

/// Copies every `Some` field of `$ovr` over the same field of `$base`.
macro_rules! overlay {
    ($base:expr, $ovr:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$ovr.$field {
                $base.$field = value.clone();
            }
        )+
    };
}

/// Partial site configuration. Unknown keys are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigOverride {
    pub core: Option<CoreOverride>,
    pub genre: Option<GenreOverride>,
    pub content: Option<ContentOverride>,
    pub media: Option<MediaOverride>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreOverride {
    pub primary_color_palette: Option<ColorPalette>,
    pub typography_pair: Option<TypographyPair>,
    pub hero_background: Option<HeroBackground>,
    pub section_background_strategy: Option<SectionBackgrounds>,
    pub animation_intensity: Option<AnimationIntensity>,
    pub color_temperature: Option<ColorTemperature>,
    pub contrast_level: Option<ContrastLevel>,
    pub border_radius_scale: Option<BorderRadiusScale>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenreOverride {
    pub particle_effects_density: Option<f64>,
    pub glow_intensity: Option<f64>,
    pub texture_overlays: Option<TextureOverlay>,
    pub motion_speed_multiplier: Option<f64>,
    pub shadow_intensity: Option<ShadowIntensity>,
    pub background_focus_effect: Option<FocusEffect>,
    pub color_saturation: Option<ColorSaturation>,
    pub layout_spacing: Option<LayoutSpacing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentOverride {
    pub band_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<Descriptions>,
    pub contact: Option<ContactDetails>,
    pub social: Option<SocialLinks>,
    pub seo: Option<SeoFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MediaOverride {
    pub hero: Option<HeroMedia>,
    pub sections: Option<SectionMedia>,
    pub gallery: Option<GalleryMedia>,
    pub logos: Option<LogoSet>,
}

impl CoreOverride {
    pub fn merged_over(&self, base: &CoreControls) -> CoreControls {
        let mut out = base.clone();
        overlay!(
            out,
            self,
            primary_color_palette,
            typography_pair,
            hero_background,
            section_background_strategy,
            animation_intensity,
            color_temperature,
            contrast_level,
            border_radius_scale,
        );
        out
    }
}

impl GenreOverride {
    pub fn merged_over(&self, base: &GenreControls) -> GenreControls {
        let mut out = base.clone();
        overlay!(
            out,
            self,
            particle_effects_density,
            glow_intensity,
            texture_overlays,
            motion_speed_multiplier,
            shadow_intensity,
            background_focus_effect,
            color_saturation,
            layout_spacing,
        );
        out
    }
}

impl ContentOverride {
    pub fn merged_over(&self, base: &SiteContent) -> SiteContent {
        let mut out = base.clone();
        overlay!(out, self, band_name, tagline, description, contact, social, seo);
        out
    }
}

impl MediaOverride {
    pub fn merged_over(&self, base: &MediaConfig) -> MediaConfig {
        let mut out = base.clone();
        overlay!(out, self, hero, sections, gallery, logos);
        out
    }
}

impl SiteConfig {
    /// Returns `self` with `ovr` merged subtree by subtree.
    pub fn merged(&self, ovr: &ConfigOverride) -> SiteConfig {
        SiteConfig {
            core: match &ovr.core {
                Some(core) => core.merged_over(&self.core),
                None => self.core.clone(),
            },
            genre: match &ovr.genre {
                Some(genre) => genre.merged_over(&self.genre),
                None => self.genre.clone(),
            },
            content: match &ovr.content {
                Some(content) => content.merged_over(&self.content),
                None => self.content.clone(),
            },
            media: match &ovr.media {
                Some(media) => media.merged_over(&self.media),
                None => self.media.clone(),
            },
            version: ovr.version.clone().unwrap_or_else(|| self.version.clone()),
        }
    }
}

impl From<CoreControls> for CoreOverride {
    fn from(core: CoreControls) -> Self {
        Self {
            primary_color_palette: Some(core.primary_color_palette),
            typography_pair: Some(core.typography_pair),
            hero_background: Some(core.hero_background),
            section_background_strategy: Some(core.section_background_strategy),
            animation_intensity: Some(core.animation_intensity),
            color_temperature: Some(core.color_temperature),
            contrast_level: Some(core.contrast_level),
            border_radius_scale: Some(core.border_radius_scale),
        }
    }
}

impl From<GenreControls> for GenreOverride {
    fn from(genre: GenreControls) -> Self {
        Self {
            particle_effects_density: Some(genre.particle_effects_density),
            glow_intensity: Some(genre.glow_intensity),
            texture_overlays: Some(genre.texture_overlays),
            motion_speed_multiplier: Some(genre.motion_speed_multiplier),
            shadow_intensity: Some(genre.shadow_intensity),
            background_focus_effect: Some(genre.background_focus_effect),
            color_saturation: Some(genre.color_saturation),
            layout_spacing: Some(genre.layout_spacing),
        }
    }
}
