//! Discovery Engine (Vertex AI Search) provider implementation

use super::models::{RawSearchResponse, SearchRequest};
use super::traits::SearchProvider;
use crate::config::{OutgoingSettings, ProviderSettings};
use crate::error::SearchError;
use crate::network::build_client;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

const API_HOST: &str = "discoveryengine.googleapis.com";
const API_VERSION: &str = "v1beta";

/// Client for the `servingConfigs.search` method of one data store
pub struct DiscoveryEngine {
    client: Client,
    base_url: String,
    serving_config: String,
    search_config: Map<String, Value>,
    access_token: Option<String>,
}

impl DiscoveryEngine {
    /// Create a provider from settings
    pub fn from_settings(
        provider: &ProviderSettings,
        outgoing: &OutgoingSettings,
    ) -> Result<Self, SearchError> {
        let client = build_client(outgoing)?;
        Self::with_client(client, provider)
    }

    /// Create a provider around an existing HTTP client
    pub fn with_client(client: Client, provider: &ProviderSettings) -> Result<Self, SearchError> {
        if provider.project_id.trim().is_empty() {
            return Err(SearchError::Config("project id is empty".to_string()));
        }
        if provider.data_store_id.trim().is_empty() {
            return Err(SearchError::Config("data store id is empty".to_string()));
        }

        let base_url = match provider.endpoint.as_deref() {
            Some(endpoint) => {
                Url::parse(endpoint)
                    .map_err(|e| SearchError::Config(format!("endpoint {}: {}", endpoint, e)))?;
                endpoint.trim_end_matches('/').to_string()
            }
            None => format!("https://{}", api_host(&provider.location)),
        };

        Ok(Self {
            client,
            base_url,
            serving_config: serving_config_path(provider),
            search_config: provider.search_config.clone(),
            access_token: provider.access_token.clone(),
        })
    }

    /// Full resource name of the serving config being queried
    pub fn serving_config(&self) -> &str {
        &self.serving_config
    }

    /// URL of the search method
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/{}:search",
            self.base_url, API_VERSION, self.serving_config
        )
    }

    /// Build the JSON request body; configured search options are applied last
    pub fn request_body(&self, request: &SearchRequest) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(request.full_query()));
        if let Some(ref filter) = request.filter {
            body.insert("filter".to_string(), Value::String(filter.clone()));
        }
        body.insert(
            "servingConfig".to_string(),
            Value::String(self.serving_config.clone()),
        );
        for (key, value) in &self.search_config {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

#[async_trait]
impl SearchProvider for DiscoveryEngine {
    fn name(&self) -> &str {
        "discoveryengine"
    }

    async fn search(&self, request: &SearchRequest) -> Result<RawSearchResponse, SearchError> {
        let url = self.search_url();
        debug!("POST {}", url);

        let mut builder = self.client.post(&url).json(&self.request_body(request));
        if let Some(ref token) = self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// API host for a data store location; multi-region stores have their own host
pub fn api_host(location: &str) -> String {
    if location.is_empty() || location == "global" {
        API_HOST.to_string()
    } else {
        format!("{}-{}", location, API_HOST)
    }
}

/// Resource name of a serving config
pub fn serving_config_path(provider: &ProviderSettings) -> String {
    format!(
        "projects/{}/locations/{}/collections/{}/dataStores/{}/servingConfigs/{}",
        provider.project_id,
        provider.location,
        provider.collection_id,
        provider.data_store_id,
        provider.serving_config_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEARCH_PATH: &str = "/v1beta/projects/my-project/locations/global/collections/default_collection/dataStores/docs/servingConfigs/default_config:search";

    fn settings(endpoint: Option<String>) -> ProviderSettings {
        ProviderSettings {
            project_id: "my-project".to_string(),
            data_store_id: "docs".to_string(),
            endpoint,
            ..Default::default()
        }
    }

    #[test]
    fn test_api_host() {
        assert_eq!(api_host("global"), "discoveryengine.googleapis.com");
        assert_eq!(api_host("eu"), "eu-discoveryengine.googleapis.com");
        assert_eq!(api_host("us"), "us-discoveryengine.googleapis.com");
    }

    #[test]
    fn test_search_url() {
        let engine = assert_ok!(DiscoveryEngine::with_client(Client::new(), &settings(None)));
        assert_eq!(
            engine.search_url(),
            format!("https://discoveryengine.googleapis.com{}", SEARCH_PATH)
        );
    }

    #[test]
    fn test_missing_data_store_rejected() {
        let mut provider = settings(None);
        provider.data_store_id = String::new();
        let result = DiscoveryEngine::with_client(Client::new(), &provider);
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[test]
    fn test_request_body_merges_search_config() {
        let mut provider = settings(None);
        provider
            .search_config
            .insert("pageSize".to_string(), json!(5));
        provider.search_config.insert(
            "contentSearchSpec".to_string(),
            json!({"summarySpec": {"summaryResultCount": 3}}),
        );
        let engine = DiscoveryEngine::with_client(Client::new(), &provider).unwrap();

        let request = SearchRequest::new("rust")
            .with_context(Some("be brief".to_string()))
            .with_filter(Some("siteSearch:\"https://example.com\"".to_string()));
        let body = engine.request_body(&request);

        assert_eq!(body["query"], "rust\nbe brief");
        assert_eq!(body["filter"], "siteSearch:\"https://example.com\"");
        assert_eq!(body["servingConfig"], engine.serving_config());
        assert_eq!(body["pageSize"], 5);
        assert_eq!(body["contentSearchSpec"]["summarySpec"]["summaryResultCount"], 3);
    }

    #[tokio::test]
    async fn test_search_against_mock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({"query": "what is rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "document": {"derivedStructData": {"title": "Rust", "link": "https://rust-lang.org"}}
                }],
                "summary": {"summaryText": "A language [0]."}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut provider = settings(Some(server.uri()));
        provider.access_token = Some("secret".to_string());
        let engine = DiscoveryEngine::with_client(Client::new(), &provider).unwrap();

        let response = assert_ok!(engine.search(&SearchRequest::new("what is rust")).await);
        let results = response.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link(), Some("https://rust-lang.org"));
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
            .mount(&server)
            .await;

        let engine =
            DiscoveryEngine::with_client(Client::new(), &settings(Some(server.uri()))).unwrap();
        let err = assert_err!(engine.search(&SearchRequest::new("q")).await);
        match err {
            SearchError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "permission denied");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_search_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let engine =
            DiscoveryEngine::with_client(Client::new(), &settings(Some(server.uri()))).unwrap();
        let err = assert_err!(engine.search(&SearchRequest::new("q")).await);
        assert!(matches!(err, SearchError::Decode(_)));
    }
}
