//! Content pipeline metrics.
//!
//! # Metrics
//! - `bandsite_content_cache_hits_total` (counter): document cache hits
//! - `bandsite_content_cache_misses_total` (counter): document cache misses
//! - `bandsite_content_cache_entries` (gauge): cached documents
//! - `bandsite_content_fallbacks_total` (counter): api/cms loads retried
//!   through files, labelled by `source`
//!
//! No recorder is installed here; without one every call is a no-op.

use metrics::{counter, gauge};

pub const CACHE_HITS: &str = "bandsite_content_cache_hits_total";
pub const CACHE_MISSES: &str = "bandsite_content_cache_misses_total";
pub const CACHE_ENTRIES: &str = "bandsite_content_cache_entries";
pub const CONTENT_FALLBACKS: &str = "bandsite_content_fallbacks_total";

pub fn record_cache_hit() {
    counter!(CACHE_HITS).increment(1);
}

pub fn record_cache_miss() {
    counter!(CACHE_MISSES).increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!(CACHE_ENTRIES).set(entries as f64);
}

pub fn record_content_fallback(source: &'static str) {
    counter!(CONTENT_FALLBACKS, "source" => source).increment(1);
}
