//! Utility class bundles derived from the configuration.

use serde::Serialize;

use crate::config::schema::{BorderRadiusScale, SiteConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorClasses {
    pub bg: String,
    pub text: String,
    pub border: String,
    pub hover: String,
}

impl ColorClasses {
    fn for_color(color: &str) -> Self {
        Self {
            bg: format!("bg-{}", color),
            text: format!("text-{}", color),
            border: format!("border-{}", color),
            hover: format!("hover:bg-{}", color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyClasses {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundedClasses {
    pub default: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredClasses {
    pub primary: ColorClasses,
    pub secondary: ColorClasses,
    pub accent: ColorClasses,
    pub typography: TypographyClasses,
    pub rounded: RoundedClasses,
}

fn default_radius_suffix(scale: BorderRadiusScale) -> &'static str {
    match scale {
        BorderRadiusScale::Sharp => "none",
        BorderRadiusScale::Subtle => "sm",
        BorderRadiusScale::Modern => "md",
        BorderRadiusScale::Rounded => "lg",
    }
}

fn button_radius_suffix(scale: BorderRadiusScale) -> &'static str {
    match scale {
        BorderRadiusScale::Sharp => "none",
        BorderRadiusScale::Rounded => "full",
        BorderRadiusScale::Subtle | BorderRadiusScale::Modern => "lg",
    }
}

pub fn configured_classes(config: &SiteConfig) -> ConfiguredClasses {
    let palette = &config.core.primary_color_palette;
    let typography = &config.core.typography_pair;
    let radius = config.core.border_radius_scale;

    ConfiguredClasses {
        primary: ColorClasses::for_color(&palette.primary),
        secondary: ColorClasses::for_color(&palette.secondary),
        accent: ColorClasses::for_color(&palette.accent),
        typography: TypographyClasses {
            heading: format!("font-{}", typography.heading_font.to_lowercase()),
            body: format!("font-{}", typography.body_font.to_lowercase()),
        },
        rounded: RoundedClasses {
            default: format!("rounded-{}", default_radius_suffix(radius)),
            button: format!("rounded-{}", button_radius_suffix(radius)),
        },
    }
}
