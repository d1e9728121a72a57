//! Animation descriptors and effect toggles.

use serde::Serialize;

use crate::config::schema::{AnimationIntensity, SiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationClasses {
    pub transition: &'static str,
    pub hover: &'static str,
    pub entrance: &'static str,
}

pub fn animation_classes(intensity: AnimationIntensity) -> AnimationClasses {
    match intensity {
        AnimationIntensity::Minimal => AnimationClasses {
            transition: "transition-all duration-300",
            hover: "hover:scale-105",
            entrance: "animate-fade-in",
        },
        AnimationIntensity::Moderate => AnimationClasses {
            transition: "transition-all duration-500",
            hover: "hover:scale-110 hover:shadow-lg",
            entrance: "animate-slide-up",
        },
        AnimationIntensity::Full => AnimationClasses {
            transition: "transition-all duration-700",
            hover: "hover:scale-110 hover:shadow-xl hover:rotate-1",
            entrance: "animate-complex-entrance",
        },
    }
}

/// Scale a base duration by the configured motion speed.
pub fn animation_duration(config: &SiteConfig, base: f64) -> f64 {
    base / config.genre.motion_speed_multiplier
}

/// Which heavy effects the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectToggles {
    pub particles: bool,
    pub glow: bool,
    pub heavy_animations: bool,
    pub background_video: bool,
}

pub fn effect_toggles(config: &SiteConfig) -> EffectToggles {
    let intensity = config.core.animation_intensity;
    EffectToggles {
        particles: config.genre.particle_effects_density > 0.0,
        glow: config.genre.glow_intensity > 0.0,
        heavy_animations: intensity == AnimationIntensity::Full,
        background_video: intensity != AnimationIntensity::Minimal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_table() {
        assert_eq!(animation_classes(AnimationIntensity::Minimal).entrance, "animate-fade-in");
        assert_eq!(
            animation_classes(AnimationIntensity::Moderate).hover,
            "hover:scale-110 hover:shadow-lg"
        );
        assert_eq!(
            animation_classes(AnimationIntensity::Full).transition,
            "transition-all duration-700"
        );
    }

    #[test]
    fn test_duration_scales_with_motion_speed() {
        let mut config = SiteConfig::default();
        config.genre.motion_speed_multiplier = 2.0;
        assert_eq!(animation_duration(&config, 600.0), 300.0);
        config.genre.motion_speed_multiplier = 0.5;
        assert_eq!(animation_duration(&config, 600.0), 1200.0);
    }

    #[test]
    fn test_effect_toggles() {
        let mut config = SiteConfig::default();
        let toggles = effect_toggles(&config);
        assert!(toggles.particles && toggles.glow && toggles.heavy_animations && toggles.background_video);

        config.genre.glow_intensity = 0.0;
        config.core.animation_intensity = AnimationIntensity::Minimal;
        let toggles = effect_toggles(&config);
        assert!(!toggles.glow);
        assert!(!toggles.heavy_animations);
        assert!(!toggles.background_video);
    }
}
