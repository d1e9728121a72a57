//! Per-location document cache.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use crate::observability::metrics;

/// Parsed documents keyed by resolved path or URL. No expiry; the only
/// invalidation is [`DocumentCache::clear`].
#[derive(Debug, Clone, Default)]
pub struct DocumentCache {
    inner: Arc<DashMap<String, Value>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: &str) -> Option<Value> {
        let hit = self.inner.get(location).map(|r| r.value().clone());
        if hit.is_some() {
            metrics::record_cache_hit();
        } else {
            metrics::record_cache_miss();
        }
        hit
    }

    pub fn insert(&self, location: &str, value: Value) {
        self.inner.insert(location.to_string(), value);
        metrics::record_cache_size(self.inner.len());
    }

    pub fn contains(&self, location: &str) -> bool {
        self.inner.contains_key(location)
    }

    pub fn clear(&self) {
        self.inner.clear();
        metrics::record_cache_size(0);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
