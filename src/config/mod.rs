//! Site configuration subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in default (schema.rs)
//!     → optional override (loader.rs reads TOML/JSON)
//!     → per-subtree merge (merge.rs)
//!     → optional genre preset (crate::presets)
//!     → ConfigStore publishes Arc<SiteConfig>
//!     → validation.rs reports problems (advisory)
//!     ↔ export.rs converts to and from the design export format
//!
//! On override file change:
//!     watcher.rs detects change
//!     → store reloads from the file (default on failure)
//!     → receivers observe new config
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable; every change publishes a full new config
//! - Merge is one level deep per subtree, arrays replace wholesale
//! - Validation never blocks loading

pub mod error;
pub mod export;
pub mod loader;
pub mod merge;
pub mod schema;
pub mod store;
pub mod validation;
pub mod watcher;

pub use error::ConfigError;
pub use export::DesignExport;
pub use merge::{ConfigOverride, ContentOverride, CoreOverride, GenreOverride, MediaOverride};
pub use schema::SiteConfig;
pub use store::ConfigStore;
pub use validation::{validate_config, ValidationReport};
