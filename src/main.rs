//! discovery-search server
//!
//! This is the main entry point for the application.

use anyhow::Result;
use discovery_search::{
    config,
    provider::DiscoveryEngine,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting discovery-search v{}", discovery_search::VERSION);

    // Load configuration
    let settings = config::load()?;
    settings.validate()?;
    info!(
        "Using data store {} in project {} ({})",
        settings.provider.data_store_id, settings.provider.project_id, settings.provider.location
    );

    // Initialize provider
    let provider = DiscoveryEngine::from_settings(&settings.provider, &settings.outgoing)?;
    info!("Querying serving config {}", provider.serving_config());

    // Create application state
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );
    let state = AppState::new(settings, Arc::new(provider))?;
    let app = create_router(state);

    info!("Search server started on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
