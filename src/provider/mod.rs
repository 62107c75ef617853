//! Search provider module
//!
//! Defines the SearchProvider capability, the raw payload models it returns,
//! and the Discovery Engine implementation.

mod discovery;
mod models;
mod traits;

pub use discovery::{api_host, serving_config_path, DiscoveryEngine};
pub use models::*;
pub use traits::SearchProvider;

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::SearchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider returning a fixed payload, or failing when none is set
    pub struct StaticProvider {
        response: Option<RawSearchResponse>,
        calls: AtomicUsize,
    }

    impl StaticProvider {
        pub fn new(response: RawSearchResponse) -> Self {
            Self {
                response: Some(response),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn search(&self, _request: &SearchRequest) -> Result<RawSearchResponse, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().ok_or(SearchError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }
}
