//! CSS custom property generation.

use std::collections::BTreeMap;

use crate::config::schema::{BorderRadiusScale, FontScale, LayoutSpacing, ShadowIntensity, SiteConfig};

/// Something that accepts CSS custom properties, such as a document root.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

pub fn spacing_multiplier(scale: FontScale) -> f64 {
    match scale {
        FontScale::Compact => 0.8,
        FontScale::Balanced => 1.0,
        FontScale::Spacious => 1.2,
    }
}

pub fn layout_spacing_multiplier(spacing: LayoutSpacing) -> f64 {
    match spacing {
        LayoutSpacing::Compact => 0.75,
        LayoutSpacing::Balanced => 1.0,
        LayoutSpacing::Spacious => 1.25,
    }
}

pub fn border_radius(scale: BorderRadiusScale) -> &'static str {
    match scale {
        BorderRadiusScale::Sharp => "0px",
        BorderRadiusScale::Subtle => "4px",
        BorderRadiusScale::Modern => "8px",
        BorderRadiusScale::Rounded => "12px",
    }
}

pub fn shadow(intensity: ShadowIntensity) -> &'static str {
    match intensity {
        ShadowIntensity::Flat => "none",
        ShadowIntensity::Subtle => "0 1px 3px rgba(0, 0, 0, 0.12)",
        ShadowIntensity::Moderate => "0 4px 6px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06)",
        ShadowIntensity::Dramatic => "0 20px 25px rgba(0, 0, 0, 0.15), 0 10px 10px rgba(0, 0, 0, 0.04)",
    }
}

/// Map a configuration to CSS custom properties.
pub fn css_variables(config: &SiteConfig) -> BTreeMap<String, String> {
    let core = &config.core;
    let genre = &config.genre;
    let palette = &core.primary_color_palette;

    let mut vars = BTreeMap::new();
    let mut set = |name: &str, value: String| {
        vars.insert(name.to_string(), value);
    };

    set("--color-primary", palette.primary.clone());
    set("--color-secondary", palette.secondary.clone());
    set("--color-accent", palette.accent.clone());
    set("--color-background", palette.background.clone());
    set("--color-surface", palette.surface.clone());

    set("--font-heading", core.typography_pair.heading_font.clone());
    set("--font-body", core.typography_pair.body_font.clone());

    set(
        "--spacing-multiplier",
        spacing_multiplier(core.typography_pair.font_scale).to_string(),
    );
    set(
        "--layout-spacing-multiplier",
        layout_spacing_multiplier(genre.layout_spacing).to_string(),
    );
    set("--border-radius", border_radius(core.border_radius_scale).to_string());

    set("--motion-speed-multiplier", genre.motion_speed_multiplier.to_string());
    set("--particle-density", genre.particle_effects_density.to_string());
    set("--glow-intensity", genre.glow_intensity.to_string());

    set("--shadow-default", shadow(genre.shadow_intensity).to_string());

    vars
}

/// Apply every variable to `target`. Without a target this does nothing.
pub fn inject_css_variables(config: &SiteConfig, target: Option<&mut dyn StyleTarget>) {
    let Some(target) = target else {
        return;
    };
    for (name, value) in css_variables(config) {
        target.set_property(&name, &value);
    }
}

/// Collects properties into a `:root { ... }` stylesheet block.
#[derive(Debug, Default, Clone)]
pub struct RootStylesheet {
    properties: Vec<(String, String)>,
}

impl RootStylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn render(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in &self.properties {
            out.push_str(&format!("  {}: {};\n", name, value));
        }
        out.push('}');
        out.push('\n');
        out
    }
}

impl StyleTarget for RootStylesheet {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::ConfigStore;

    #[test]
    fn test_default_projection() {
        let vars = css_variables(&SiteConfig::default());
        assert_eq!(vars.len(), 14);
        assert_eq!(vars["--color-primary"], "amber-900");
        assert_eq!(vars["--font-heading"], "Inter");
        assert_eq!(vars["--spacing-multiplier"], "1");
        assert_eq!(vars["--layout-spacing-multiplier"], "1");
        assert_eq!(vars["--border-radius"], "4px");
        assert_eq!(vars["--motion-speed-multiplier"], "1");
        assert_eq!(vars["--particle-density"], "0.8");
        assert_eq!(vars["--glow-intensity"], "0.3");
        assert_eq!(
            vars["--shadow-default"],
            "0 4px 6px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06)"
        );
    }

    #[test]
    fn test_sharp_radius() {
        let mut config = SiteConfig::default();
        config.core.border_radius_scale = BorderRadiusScale::Sharp;
        assert_eq!(css_variables(&config)["--border-radius"], "0px");
    }

    #[test]
    fn test_spacious_font_scale() {
        let mut config = SiteConfig::default();
        config.core.typography_pair.font_scale = FontScale::Spacious;
        config.genre.layout_spacing = LayoutSpacing::Compact;
        let vars = css_variables(&config);
        assert_eq!(vars["--spacing-multiplier"], "1.2");
        assert_eq!(vars["--layout-spacing-multiplier"], "0.75");
    }

    #[test]
    fn test_preset_without_glow() {
        let store = ConfigStore::new();
        let config = store.apply_preset("metal-rock").unwrap();
        let vars = css_variables(&config);
        assert_eq!(vars["--glow-intensity"], "0");
        assert_eq!(vars["--shadow-default"], shadow(ShadowIntensity::Dramatic));
    }

    #[test]
    fn test_projection_is_pure() {
        let a = SiteConfig::default();
        let b = a.clone();
        assert_eq!(css_variables(&a), css_variables(&b));
        assert_eq!(css_variables(&a), css_variables(&a));
    }

    #[test]
    fn test_inject_into_stylesheet() {
        let mut sheet = RootStylesheet::new();
        inject_css_variables(&SiteConfig::default(), Some(&mut sheet));
        assert_eq!(sheet.properties().len(), 14);

        let css = sheet.render();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --border-radius: 4px;\n"));

        // No target, no effect and no panic.
        inject_css_variables(&SiteConfig::default(), None);
    }
}
