//! HTTP request handlers

use super::negotiate::{negotiate, ResponseFormat};
use super::state::AppState;
use crate::error::SearchError;
use crate::provider::SearchRequest;
use crate::render::RenderedResult;
use axum::{
    extract::{Query, State},
    http::{header::ACCEPT, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tera::Context;

/// Query parameters for search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Extra text appended to the query
    pub context: Option<String>,
    /// Provider filter expression
    pub filter: Option<String>,
    /// Output format, overrides the Accept header
    pub format: Option<String>,
    /// Return only the results markup, for embedding
    pub fragment: Option<String>,
}

impl SearchParams {
    /// Whether only the results fragment was asked for
    pub fn wants_fragment(&self) -> bool {
        self.fragment.as_deref().map_or(false, is_truthy)
    }
}

/// Lenient flag parsing: `1`, `true`, `yes`, `on` in any case
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    let ctx = page_context(&state);
    render_page(&state, "index.html", &ctx)
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response {
    let fragment = params.wants_fragment();
    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, "Missing query string").into_response(),
    };

    let format = match params.format.as_deref() {
        Some(format) => ResponseFormat::from_param(format),
        None => negotiate(headers.get(ACCEPT).and_then(|v| v.to_str().ok())),
    };
    let Some(format) = format else {
        return (StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response();
    };

    let request = SearchRequest::new(query.clone())
        .with_context(params.context)
        .with_filter(params.filter);

    let rendered = match state.search.run(&request).await {
        Ok(rendered) => rendered,
        Err(SearchError::EmptyQuery) => {
            return (StatusCode::BAD_REQUEST, "Missing query string").into_response()
        }
        Err(e) => {
            tracing::error!("Search failed for '{}': {}", query, e);
            return (e.status_code(), "Error").into_response();
        }
    };

    match format {
        ResponseFormat::Json => Json(rendered).into_response(),
        ResponseFormat::Html => {
            let ctx = results_context(&state, &query, &rendered);
            let template = if fragment {
                "components/results.html"
            } else {
                "search.html"
            };
            render_page(&state, template, &ctx)
        }
    }
}

/// Stats handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

fn page_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", state.title());
    ctx.insert("placeholder", &state.settings.ui.placeholder);
    ctx
}

fn results_context(state: &AppState, query: &str, rendered: &RenderedResult) -> Context {
    let mut ctx = page_context(state);
    ctx.insert("query", query);
    ctx.insert("answer", &rendered.answer);
    ctx.insert("refs", &rendered.refs);
    ctx
}

fn render_page(state: &AppState, template: &str, ctx: &Context) -> Response {
    match state.templates.render_with_context(template, ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}
