//! Serper-compatible search tool

use super::models::{SearchRequest, SearchResponse};
use super::{WebSearch, ERROR_PREFIX, NOT_CONFIGURED, NO_RESULTS};
use crate::config::SearchSettings;
use crate::network::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Search tool that POSTs `{"q": query}` to the provider endpoint
#[derive(Clone)]
pub struct SearchTool {
    client: HttpClient,
    endpoint: String,
    api_key: Option<String>,
    max_snippets: usize,
}

impl SearchTool {
    pub fn new(settings: &SearchSettings, client: HttpClient) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            max_snippets: settings.max_snippets,
        }
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, api_key: &str, query: &str) -> Result<SearchResponse> {
        let response = self
            .client
            .post_json(
                &self.endpoint,
                &[("X-API-KEY", api_key)],
                &SearchRequest { q: query },
            )
            .await?
            .error_for_status()?;

        response.json()
    }
}

#[async_trait]
impl WebSearch for SearchTool {
    async fn search(&self, query: &str) -> String {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => return NOT_CONFIGURED.to_string(),
        };

        match self.fetch(api_key, query).await {
            Ok(response) => {
                debug!(
                    "Search returned {} organic results",
                    response.organic.len()
                );
                let context = response.snippet_context(self.max_snippets);
                if context.is_empty() {
                    NO_RESULTS.to_string()
                } else {
                    context
                }
            }
            Err(e) => {
                warn!("Error calling search API: {}", e);
                format!("{}{}", ERROR_PREFIX, e)
            }
        }
    }
}
