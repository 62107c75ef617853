//! Caching module for discovery-search
//!
//! Keeps rendered results for repeated queries so the provider is not asked twice.

use crate::config::CacheSettings;
use crate::provider::SearchRequest;
use crate::render::RenderedResult;
use moka::future::Cache;
use std::time::Duration;

/// Cache for rendered search results
#[derive(Clone)]
pub struct ResultCache {
    cache: Option<Cache<String, RenderedResult>>,
}

impl ResultCache {
    /// Create a new result cache with specified TTL; a TTL of zero disables it
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        if ttl_seconds == 0 {
            return Self::disabled();
        }

        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache: Some(cache) }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(settings.ttl_seconds, settings.max_capacity)
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self { cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Get a cached result
    pub async fn get(&self, key: &str) -> Option<RenderedResult> {
        match self.cache {
            Some(ref cache) => cache.get(key).await,
            None => None,
        }
    }

    /// Store a result in cache
    pub async fn set(&self, key: String, value: RenderedResult) {
        if let Some(ref cache) = self.cache {
            cache.insert(key, value).await;
        }
    }
}

/// Generate a cache key for a search request
pub fn query_cache_key(request: &SearchRequest) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(request.query.as_bytes());
    hasher.update([0u8]);
    hasher.update(request.context.as_deref().unwrap_or_default().as_bytes());
    hasher.update([0u8]);
    hasher.update(request.filter.as_deref().unwrap_or_default().as_bytes());

    format!("{:x}", hasher.finalize())
}
