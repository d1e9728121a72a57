//! Band content loading.
//!
//! ```text
//!  ContentConfig ──► ContentLoader ──► DocumentFetcher (fs / reqwest)
//!                        │
//!                        └──► DocumentCache (per location)
//! ```
//!
//! The file source reads five documents per band:
//!
//! ```text
//! {root}/{band_id}/band-profile.json
//! {root}/{band_id}/data/{about,social,contact,shows}.json
//! ```
//!
//! The api and cms sources read a single `BandContent` document from
//! `{base}/bands/{band_id}`.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod queries;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cache::DocumentCache;
pub use error::{ContentError, ContentResult, FetchError};
pub use fetcher::{DocumentFetcher, StdFetcher};
pub use loader::ContentLoader;
pub use source::{ContentConfig, ContentConfigUpdate, ContentSource};
pub use types::{BandContent, MediaAssets};
