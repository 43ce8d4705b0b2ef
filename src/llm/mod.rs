//! Hosted language model access
//!
//! Defines the chat message types, the provider traits used by the
//! orchestrator, and the Azure OpenAI-compatible client that implements them.

mod azure;
mod types;

pub use azure::AzureOpenAiClient;
pub use types::*;

use async_trait::async_trait;

/// Result type for model provider operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to a model provider
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider returned HTTP {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Chat completion capability
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Run one completion round trip and return the first choice's content.
    /// Sampling is fixed at `DEFAULT_TEMPERATURE` / `DEFAULT_MAX_TOKENS`.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Embedding generation capability
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    /// Return the first embedding vector for `text`
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
