//! Provider capability trait

use super::models::{RawSearchResponse, SearchRequest};
use crate::error::SearchError;
use async_trait::async_trait;

/// A service that executes a search query and returns its raw structured response
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Run one search; exactly one upstream call, no pagination
    async fn search(&self, request: &SearchRequest) -> Result<RawSearchResponse, SearchError>;
}
