//! Error types for the provider boundary

use axum::http::StatusCode;

/// Failures of a search run, from request validation through the provider call
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("missing query string")]
    EmptyQuery,

    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl SearchError {
    /// Status code the web layer answers with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyQuery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
