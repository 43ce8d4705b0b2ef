//! Settings structures for the assistant configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub azure: AzureSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary variable source. Empty values count as unset.
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(val) = get("AZURE_API_KEY") {
            self.azure.api_key = Some(val);
        }
        if let Some(val) = get("AZURE_API_VERSION") {
            self.azure.api_version = val;
        }
        if let Some(val) = get("AZURE_OPENAI_ENDPOINT") {
            self.azure.endpoint = Some(val);
        }
        if let Some(val) = get("AZURE_OPENAI_CHAT_DEPLOYMENT_NAME") {
            self.azure.chat_deployment = Some(val);
        }
        if let Some(val) = get("AZURE_OPENAI_EMBEDDING_DEPLOYMENT_NAME") {
            self.azure.embedding_deployment = Some(val);
        }
        if let Some(val) = get("SERPER_API_KEY") {
            self.search.api_key = Some(val);
        }
        if let Some(val) = get("ASSISTANT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = get("ASSISTANT_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
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
    /// Directory served under /static
    pub static_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Hosted chat/embedding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureSettings {
    /// API key sent in the `api-key` header
    pub api_key: Option<String>,
    /// Value of the `api-version` query parameter
    pub api_version: String,
    /// Resource endpoint, e.g. https://my-resource.openai.azure.com
    pub endpoint: Option<String>,
    /// Chat completion deployment name
    pub chat_deployment: Option<String>,
    /// Embedding deployment name
    pub embedding_deployment: Option<String>,
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_version: "2024-02-01".to_string(),
            endpoint: None,
            chat_deployment: None,
            embedding_deployment: None,
        }
    }
}

/// Web search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// API key sent in the `X-API-KEY` header (none = search disabled)
    pub api_key: Option<String>,
    /// Search endpoint URL
    pub endpoint: String,
    /// Number of organic results folded into the prompt
    pub max_snippets: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://google.serper.dev/search".to_string(),
            max_snippets: 3,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds, applied to every outbound call
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT,
            pool_maxsize: 20,
        }
    }
}
