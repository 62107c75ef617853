//! discovery-search: an answer-and-citations front end for Discovery Engine
//!
//! Forwards a user query to a Discovery Engine data store and renders the
//! generated answer, with its citation markers linked to the supporting
//! documents, as HTML or JSON.

pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod network;
pub mod provider;
pub mod render;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::SearchError;
pub use provider::{RawSearchResponse, SearchProvider, SearchRequest};
pub use render::{render, Reference, RenderedResult};
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
