//! Genre presets.
//!
//! A fixed table of named partial overlays for the genre subtree. Lookup is
//! by exact key; there are no mutation operations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::error::ConfigError;
use crate::config::merge::{CoreOverride, GenreOverride};
use crate::config::schema::{BorderRadiusScale, ColorSaturation, ContrastLevel, ShadowIntensity, TextureOverlay};

/// Known genre presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    /// High energy: dense particles, strong glow, fast motion.
    EdmPop,
    /// Warm and textured.
    IndieRock,
    /// Sharp and dramatic.
    MetalRock,
}

/// A preset overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenrePreset {
    /// Fields applied over the current genre subtree.
    pub genre: GenreOverride,

    /// Core adjustments that suit the genre. Carried as data only; applying a
    /// preset never touches the core subtree.
    pub suggested_core: CoreOverride,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::EdmPop, Genre::IndieRock, Genre::MetalRock];

    /// Table key for this preset.
    pub fn key(self) -> &'static str {
        match self {
            Genre::EdmPop => "edm-pop",
            Genre::IndieRock => "indie-rock",
            Genre::MetalRock => "metal-rock",
        }
    }

    pub fn preset(self) -> GenrePreset {
        match self {
            Genre::EdmPop => GenrePreset {
                genre: GenreOverride {
                    particle_effects_density: Some(1.0),
                    glow_intensity: Some(0.8),
                    motion_speed_multiplier: Some(1.5),
                    color_saturation: Some(ColorSaturation::Neon),
                    ..Default::default()
                },
                suggested_core: CoreOverride {
                    border_radius_scale: Some(BorderRadiusScale::Rounded),
                    ..Default::default()
                },
            },
            Genre::IndieRock => GenrePreset {
                genre: GenreOverride {
                    particle_effects_density: Some(0.4),
                    glow_intensity: Some(0.1),
                    texture_overlays: Some(TextureOverlay::Moderate),
                    motion_speed_multiplier: Some(0.8),
                    color_saturation: Some(ColorSaturation::Muted),
                    ..Default::default()
                },
                suggested_core: CoreOverride {
                    border_radius_scale: Some(BorderRadiusScale::Subtle),
                    ..Default::default()
                },
            },
            Genre::MetalRock => GenrePreset {
                genre: GenreOverride {
                    particle_effects_density: Some(0.6),
                    glow_intensity: Some(0.0),
                    texture_overlays: Some(TextureOverlay::Grungy),
                    shadow_intensity: Some(ShadowIntensity::Dramatic),
                    color_saturation: Some(ColorSaturation::Muted),
                    ..Default::default()
                },
                suggested_core: CoreOverride {
                    border_radius_scale: Some(BorderRadiusScale::Sharp),
                    contrast_level: Some(ContrastLevel::High),
                    ..Default::default()
                },
            },
        }
    }
}

impl FromStr for Genre {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.key() == name)
            .ok_or_else(|| ConfigError::InvalidPresetName(name.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Look up a preset by its exact table key.
pub fn lookup(name: &str) -> Result<GenrePreset, ConfigError> {
    name.parse::<Genre>().map(Genre::preset)
}
