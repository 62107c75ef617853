//! Presentation models

use serde::{Deserialize, Serialize};

/// A presentation-ready summary of one source document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Document title, or the link when the document has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Extractive answer content, else generic snippet text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Page number of the extractive answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Output of the transformer; `refs[N]` is the target of citation `[N]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResult {
    /// Answer HTML, absent when the provider returned no summary
    pub answer: Option<String>,
    pub refs: Vec<Reference>,
}

impl RenderedResult {
    pub fn has_answer(&self) -> bool {
        self.answer.is_some()
    }
}
