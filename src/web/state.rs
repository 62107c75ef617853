//! Application state shared across handlers

use crate::cache::ResultCache;
use crate::config::Settings;
use crate::metrics::Metrics;
use crate::provider::SearchProvider;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search service
    pub search: Arc<Search>,
    /// Search counters
    pub metrics: Arc<Metrics>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, provider: Arc<dyn SearchProvider>) -> anyhow::Result<Self> {
        let metrics = Arc::new(Metrics::new());
        let cache = ResultCache::from_settings(&settings.cache);
        if !cache.is_enabled() {
            tracing::info!("Result cache disabled");
        }
        let search = Arc::new(Search::new(provider, cache, metrics.clone()));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            search,
            metrics,
            templates,
        })
    }

    /// Get page title
    pub fn title(&self) -> &str {
        &self.settings.ui.title
    }
}
