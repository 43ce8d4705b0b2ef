//! Search provider response models

use serde::{Deserialize, Serialize};

/// Search request body
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
}

/// Search provider response; only the organic results are used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// A single organic result entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl SearchResponse {
    /// Join the snippets of the first `limit` organic results with single
    /// spaces. Missing or blank snippets are skipped.
    pub fn snippet_context(&self, limit: usize) -> String {
        self.organic
            .iter()
            .take(limit)
            .filter_map(|r| r.snippet.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
