//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, content, bridge
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (cache and fallback counters)
//! ```

pub mod logging;
pub mod metrics;
