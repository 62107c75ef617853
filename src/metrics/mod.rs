//! Metrics collection module
//!
//! Tracks search counts, provider failures, cache hits and provider latency.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// In-process search counters
#[derive(Debug, Default)]
pub struct Metrics {
    total_searches: AtomicU64,
    failed_searches: AtomicU64,
    cache_hits: AtomicU64,
    provider_calls: AtomicU64,
    provider_time_ms: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total_searches: u64,
    pub failed_searches: u64,
    pub cache_hits: u64,
    pub provider_calls: u64,
    pub avg_provider_time_ms: f64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_search(&self) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one provider round trip
    pub fn record_provider_time(&self, elapsed: Duration) {
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
        self.provider_time_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let provider_calls = self.provider_calls.load(Ordering::Relaxed);
        let provider_time_ms = self.provider_time_ms.load(Ordering::Relaxed);

        MetricsSnapshot {
            total_searches: self.total_searches.load(Ordering::Relaxed),
            failed_searches: self.failed_searches.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            provider_calls,
            avg_provider_time_ms: if provider_calls == 0 {
                0.0
            } else {
                provider_time_ms as f64 / provider_calls as f64
            },
        }
    }
}
