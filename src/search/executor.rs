//! Search execution

use crate::cache::{query_cache_key, ResultCache};
use crate::error::SearchError;
use crate::metrics::Metrics;
use crate::provider::{SearchProvider, SearchRequest};
use crate::render::{render, RenderedResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Search service that queries the provider and renders its response
pub struct Search {
    /// Provider being queried
    provider: Arc<dyn SearchProvider>,
    /// Rendered result cache
    cache: ResultCache,
    /// Shared counters
    metrics: Arc<Metrics>,
}

impl Search {
    /// Create a new search service
    pub fn new(provider: Arc<dyn SearchProvider>, cache: ResultCache, metrics: Arc<Metrics>) -> Self {
        Self {
            provider,
            cache,
            metrics,
        }
    }

    /// Run one search and render the result
    pub async fn run(&self, request: &SearchRequest) -> Result<RenderedResult, SearchError> {
        if request.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.metrics.record_search();

        let key = query_cache_key(request);
        if let Some(cached) = self.cache.get(&key).await {
            debug!("Cache hit for query '{}'", request.query);
            self.metrics.record_cache_hit();
            return Ok(cached);
        }

        let start = Instant::now();
        let raw = match self.provider.search(request).await {
            Ok(raw) => raw,
            Err(e) => {
                self.metrics.record_failure();
                return Err(e);
            }
        };
        let elapsed = start.elapsed();
        self.metrics.record_provider_time(elapsed);

        let rendered = render(&raw);

        info!(
            "Search '{}' on {} returned {} references (answer: {}) in {:?}",
            request.query,
            self.provider.name(),
            rendered.refs.len(),
            rendered.has_answer(),
            elapsed
        );

        self.cache.set(key, rendered.clone()).await;
        Ok(rendered)
    }
}
