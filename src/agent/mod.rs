//! Conversation orchestration module
//!
//! Decides whether to ground a query with web search, builds the tier- and
//! severity-aware system prompt, and runs the chat completion.

mod context;
mod embedding;
mod orchestrator;
mod prompt;
mod routing;

pub use context::{RequestContext, Severity, Tier};
pub use embedding::EmbeddingProvider;
pub use orchestrator::ConversationOrchestrator;
pub use prompt::{assemble_messages, build_system_prompt};
pub use routing::{KeywordRouter, NoSearch, SearchRouter};

use crate::llm::LlmError;

/// User-facing text returned whenever a reply cannot be produced
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, but I encountered an error while processing your request. Please try again.";

/// Errors from a single orchestration run
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Model returned an empty answer")]
    EmptyAnswer,
}
