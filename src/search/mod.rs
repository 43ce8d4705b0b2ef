//! Web search grounding
//!
//! Calls an external search provider and folds the top result snippets into
//! a single text blob suitable for a system prompt. Every failure degrades to
//! a descriptive string; nothing is propagated to the caller.

mod models;
mod tool;

pub use models::{OrganicResult, SearchResponse};
pub use tool::SearchTool;

use async_trait::async_trait;

/// Returned when no search API key is configured
pub const NOT_CONFIGURED: &str = "Search tool not configured.";

/// Returned when the provider answers with no usable snippets
pub const NO_RESULTS: &str = "No search results found.";

/// Prefix of the text returned when the search request fails
pub const ERROR_PREFIX: &str = "Error performing search: ";

/// Web search capability used to ground prompts
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Search for `query` and return a context string. Never fails.
    async fn search(&self, query: &str) -> String;
}
