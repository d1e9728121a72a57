//! Band site configuration and content resolution.
//!
//! ```text
//!  override file ──► ConfigStore ◄── genre presets
//!                        │
//!                        ├──► styling (CSS variables, classes)
//!                        │
//!  ContentLoader ──► ContentBridge ──► unified SiteConfig
//! ```

pub mod bridge;
pub mod config;
pub mod content;
pub mod context;
pub mod observability;
pub mod presets;
pub mod styling;

pub use bridge::{ContentBridge, ContentOrigin, UnifiedContent};
pub use config::{ConfigStore, SiteConfig};
pub use content::{BandContent, ContentLoader, ContentSource};
pub use context::SiteContext;
pub use presets::Genre;
