//! Request and response models of the search provider

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user search as handed to a provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The user query
    pub query: String,
    /// Free text appended to the query, e.g. a directive for the summarizer
    pub context: Option<String>,
    /// Provider filter expression, e.g. `siteSearch:"https://example.com/docs"`
    pub filter: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: None,
            filter: None,
        }
    }

    /// Set the context, ignoring blank values
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context.filter(|c| !c.trim().is_empty());
        self
    }

    /// Set the filter, ignoring blank values
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.trim().is_empty());
        self
    }

    /// Query text as sent to the provider, with the context on its own line
    pub fn full_query(&self) -> String {
        match self.context.as_deref() {
            Some(context) if !context.is_empty() => format!("{}\n{}", self.query, context),
            _ => self.query.clone(),
        }
    }

    /// Check if query is empty
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Search response exactly as returned by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSearchResponse {
    pub results: Option<Vec<RawResult>>,
    pub summary: Option<RawSummary>,
}

/// Generated answer attached to a response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSummary {
    /// Markdown text with `[N]` citation markers
    pub summary_text: Option<String>,
}

/// One ranked result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResult {
    pub id: Option<String>,
    pub document: Option<RawDocument>,
}

/// The document behind a result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDocument {
    pub name: Option<String>,
    pub id: Option<String>,
    /// Free-form field bag with title, link, snippets and extractive answers
    pub derived_struct_data: Option<Value>,
}

impl RawResult {
    /// Build a result around a derived field bag
    pub fn from_fields(fields: Value) -> Self {
        Self {
            id: None,
            document: Some(RawDocument {
                derived_struct_data: Some(fields),
                ..Default::default()
            }),
        }
    }

    /// The derived field bag, if it is a JSON object
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.document
            .as_ref()?
            .derived_struct_data
            .as_ref()?
            .as_object()
    }

    pub fn title(&self) -> Option<&str> {
        string_field(self.fields()?, "title")
    }

    pub fn link(&self) -> Option<&str> {
        string_field(self.fields()?, "link")
    }

    /// Content of the first extractive answer
    pub fn extractive_content(&self) -> Option<&str> {
        string_field(self.extractive_answer()?, "content")
    }

    /// Page number of the first extractive answer
    pub fn extractive_page(&self) -> Option<&str> {
        string_field(self.extractive_answer()?, "pageNumber")
    }

    /// Text of the first generic snippet
    pub fn snippet_text(&self) -> Option<&str> {
        let fields = self.fields()?;
        let entry = first_entry(fields, "snippets").or_else(|| first_entry(fields, "snippet"))?;
        string_field(entry, "snippet")
    }

    fn extractive_answer(&self) -> Option<&Map<String, Value>> {
        first_entry(self.fields()?, "extractive_answers")
    }
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

/// First object of a list-valued field; a bare object counts as a list of one
fn first_entry<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match map.get(key)? {
        Value::Array(items) => items.first()?.as_object(),
        Value::Object(entry) => Some(entry),
        _ => None,
    }
}
