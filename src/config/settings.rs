//! Settings structures for discovery-search configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub outgoing: OutgoingSettings,
    pub cache: CacheSettings,
    pub ui: UiSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PORT") {
            self.server.port = val
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port: {}", val))?;
        }
        if let Some(val) = lookup("BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("PUBLIC_DIR") {
            self.server.public_dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("PROJECT_ID") {
            self.provider.project_id = val;
        }
        if let Some(val) = lookup("DATASTORE_ID") {
            self.provider.data_store_id = val;
        }
        if let Some(val) = lookup("LOCATION") {
            self.provider.location = val;
        }
        if let Some(val) = lookup("COLLECTION_ID") {
            self.provider.collection_id = val;
        }
        if let Some(val) = lookup("SERVING_CONFIG_ID") {
            self.provider.serving_config_id = val;
        }
        if let Some(val) = lookup("SEARCH_CONFIG") {
            let parsed: serde_json::Value = serde_json::from_str(&val)?;
            match parsed {
                serde_json::Value::Object(map) => self.provider.search_config = map,
                _ => anyhow::bail!("SEARCH_CONFIG must be a JSON object"),
            }
        }
        if let Some(val) = lookup("ACCESS_TOKEN") {
            self.provider.access_token = Some(val);
        }
        if let Some(val) = lookup("DISCOVERY_ENDPOINT") {
            self.provider.endpoint = Some(val);
        }
        Ok(())
    }

    /// Check that the provider can be addressed
    pub fn validate(&self) -> Result<()> {
        if self.provider.project_id.trim().is_empty() {
            anyhow::bail!("provider.project_id (PROJECT_ID) is required");
        }
        if self.provider.data_store_id.trim().is_empty() {
            anyhow::bail!("provider.data_store_id (DATASTORE_ID) is required");
        }
        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Directory of client-side assets served as a fallback
    pub public_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            public_dir: PathBuf::from("public"),
        }
    }
}

/// Discovery Engine data store coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub project_id: String,
    pub data_store_id: String,
    /// One of `global`, `us`, `eu`
    pub location: String,
    pub collection_id: String,
    pub serving_config_id: String,
    /// Extra request fields applied on top of every search body
    pub search_config: serde_json::Map<String, serde_json::Value>,
    /// Bearer token sent with each request
    pub access_token: Option<String>,
    /// Base URL override, e.g. `http://localhost:8085`
    pub endpoint: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            data_store_id: String::new(),
            location: "global".to_string(),
            collection_id: "default_collection".to_string(),
            serving_config_id: "default_config".to_string(),
            search_config: serde_json::Map::new(),
            access_token: None,
            endpoint: None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Provider request timeout in seconds
    pub request_timeout: f64,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            proxy: None,
        }
    }
}

/// Rendered result cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Entry lifetime; 0 disables the cache
    pub ttl_seconds: u64,
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            max_capacity: 1000,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Page title
    pub title: String,
    /// Placeholder text of the search box
    pub placeholder: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Search".to_string(),
            placeholder: "Ask a question".to_string(),
        }
    }
}
