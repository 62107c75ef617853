//! Result rendering module
//!
//! Turns a raw provider payload into references plus an HTML answer
//! with resolved citation links.

mod citations;
mod markdown;
mod transformer;
mod types;

pub use citations::resolve_citations;
pub use markdown::to_html;
pub use transformer::{extract_references, render};
pub use types::{Reference, RenderedResult};
