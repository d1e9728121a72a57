//! Style projection.
//!
//! # Data Flow
//! ```text
//! SiteConfig
//!     → variables.rs (CSS custom properties, applied to a StyleTarget)
//!     → classes.rs (utility class bundles)
//!     → animation.rs (intensity descriptors, durations, effect toggles)
//! ```
//!
//! Every projection is a pure function of its input configuration.

pub mod animation;
pub mod classes;
pub mod variables;

pub use animation::{animation_classes, animation_duration, effect_toggles, AnimationClasses, EffectToggles};
pub use classes::{configured_classes, ConfiguredClasses};
pub use variables::{css_variables, inject_css_variables, RootStylesheet, StyleTarget};
