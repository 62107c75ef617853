//! HTTP networking module
//!
//! Builds the outgoing HTTP client used to reach the search provider.

mod client;

pub use client::{build_client, USER_AGENT};
