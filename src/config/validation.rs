//! Configuration validation.
//!
//! # Responsibilities
//! - Reject placeholder band copy left over from the shipped default
//! - Check color tokens (`word-number` or 6-digit hex)
//! - Check numeric knobs against their declared ranges
//!
//! # Design Decisions
//! - Returns all violations in a fixed order, not just the first
//! - Advisory: the report is data, loading never consults it
//! - Out-of-range values are reported, never clamped

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::schema::{SiteConfig, BAND_NAME_PLACEHOLDER, TAGLINE_PLACEHOLDER};

pub const MOTION_SPEED_RANGE: RangeInclusive<f64> = 0.5..=2.0;
pub const UNIT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+-\d{1,3}|#[0-9A-Fa-f]{6})$").expect("color pattern compiles")
});

/// Outcome of [`validate_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Returns true for `amber-900` style tokens and `#1a2b3c` hex values.
pub fn is_valid_color(value: &str) -> bool {
    COLOR_PATTERN.is_match(value)
}

/// Validate a configuration. Never fails; violations are returned as data.
pub fn validate_config(config: &SiteConfig) -> ValidationReport {
    let mut errors = Vec::new();

    let content = &config.content;
    if content.band_name.is_empty() || content.band_name == BAND_NAME_PLACEHOLDER {
        errors.push("Band name is required".to_string());
    }
    if content.tagline.is_empty() || content.tagline == TAGLINE_PLACEHOLDER {
        errors.push("Band tagline is required".to_string());
    }

    for (key, value) in config.core.primary_color_palette.entries() {
        if !is_valid_color(value) {
            errors.push(format!("Invalid color format for {}: {}", key, value));
        }
    }

    let genre = &config.genre;
    if !MOTION_SPEED_RANGE.contains(&genre.motion_speed_multiplier) {
        errors.push("Motion speed multiplier must be between 0.5 and 2.0".to_string());
    }
    if !UNIT_RANGE.contains(&genre.particle_effects_density) {
        errors.push("Particle effects density must be between 0 and 1".to_string());
    }
    if !UNIT_RANGE.contains(&genre.glow_intensity) {
        errors.push("Glow intensity must be between 0 and 1".to_string());
    }
    if !UNIT_RANGE.contains(&config.core.hero_background.overlay_intensity) {
        errors.push("Hero overlay intensity must be between 0 and 1".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
