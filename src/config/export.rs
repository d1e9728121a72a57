//! Design-system export format.
//!
//! A flattened view of [`SiteConfig`] grouped as `design_system`,
//! `animation_system`, `content`, `media` and `version`. The export drops
//! the hero background, section strategy, color temperature, contrast,
//! texture, focus effect and saturation; importing fills those from
//! [`SiteConfig::default`].

use serde::{Deserialize, Serialize};

use crate::config::schema::{
    AnimationIntensity, BorderRadiusScale, ColorPalette, CoreControls, GenreControls, LayoutSpacing,
    MediaConfig, ShadowIntensity, SiteConfig, SiteContent, TypographyPair,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DesignExport {
    pub design_system: DesignSystem,
    pub animation_system: AnimationSystem,
    pub content: SiteContent,
    pub media: MediaConfig,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DesignSystem {
    pub colors: ColorPalette,
    pub typography: TypographyPair,
    pub spacing: LayoutSpacing,
    pub border_radius: BorderRadiusScale,
    pub shadows: ShadowIntensity,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationSystem {
    pub intensity: AnimationIntensity,
    pub speed_multiplier: f64,
    pub particles: f64,
    pub glow: f64,
}

impl From<&SiteConfig> for DesignExport {
    fn from(config: &SiteConfig) -> Self {
        let core = &config.core;
        let genre = &config.genre;
        Self {
            design_system: DesignSystem {
                colors: core.primary_color_palette.clone(),
                typography: core.typography_pair.clone(),
                spacing: genre.layout_spacing,
                border_radius: core.border_radius_scale,
                shadows: genre.shadow_intensity,
            },
            animation_system: AnimationSystem {
                intensity: core.animation_intensity,
                speed_multiplier: genre.motion_speed_multiplier,
                particles: genre.particle_effects_density,
                glow: genre.glow_intensity,
            },
            content: config.content.clone(),
            media: config.media.clone(),
            version: config.version.clone(),
        }
    }
}

impl From<DesignExport> for SiteConfig {
    fn from(export: DesignExport) -> Self {
        let DesignExport {
            design_system,
            animation_system,
            content,
            media,
            version,
        } = export;

        SiteConfig {
            core: CoreControls {
                primary_color_palette: design_system.colors,
                typography_pair: design_system.typography,
                animation_intensity: animation_system.intensity,
                border_radius_scale: design_system.border_radius,
                ..CoreControls::default()
            },
            genre: GenreControls {
                particle_effects_density: animation_system.particles,
                glow_intensity: animation_system.glow,
                motion_speed_multiplier: animation_system.speed_multiplier,
                shadow_intensity: design_system.shadows,
                layout_spacing: design_system.spacing,
                ..GenreControls::default()
            },
            content,
            media,
            version,
        }
    }
}
