//! Raw response to presentation model

use super::citations::resolve_citations;
use super::markdown::to_html;
use super::types::{Reference, RenderedResult};
use crate::provider::{RawResult, RawSearchResponse};

/// Build the presentation model for one response
pub fn render(raw: &RawSearchResponse) -> RenderedResult {
    let refs = raw
        .results
        .as_deref()
        .map(extract_references)
        .unwrap_or_default();

    let answer = raw
        .summary
        .as_ref()
        .and_then(|summary| summary.summary_text.as_deref())
        .filter(|text| !text.is_empty())
        .map(|text| to_html(&resolve_citations(text, &refs)));

    RenderedResult { answer, refs }
}

/// One reference per result, in result order
pub fn extract_references(results: &[RawResult]) -> Vec<Reference> {
    results.iter().map(Reference::from).collect()
}

impl From<&RawResult> for Reference {
    fn from(result: &RawResult) -> Self {
        Self {
            title: result.title().or_else(|| result.link()).map(str::to_string),
            link: result.link().map(str::to_string),
            snippet: result
                .extractive_content()
                .or_else(|| result.snippet_text())
                .map(str::to_string),
            page: result.extractive_page().map(str::to_string),
        }
    }
}
