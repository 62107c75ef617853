//! Web server module
//!
//! Provides the HTTP API and web interface for discovery-search.

mod handlers;
mod negotiate;
mod routes;
mod state;
mod templates;

pub use negotiate::{negotiate, ResponseFormat};
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
