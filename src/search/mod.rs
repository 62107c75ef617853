//! Search orchestration module
//!
//! Runs a request through the cache, the provider and the result transformer.

mod executor;

pub use executor::Search;
