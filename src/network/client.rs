//! HTTP client for making requests to the search provider

use crate::config::OutgoingSettings;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every provider request
pub const USER_AGENT: &str = concat!("discovery-search/", env!("CARGO_PKG_VERSION"));

/// Create a reqwest client from the outgoing settings
pub fn build_client(settings: &OutgoingSettings) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs_f64(settings.request_timeout))
        .user_agent(USER_AGENT)
        .gzip(true)
        .brotli(true);

    if let Some(ref proxy_url) = settings.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    builder.build()
}
