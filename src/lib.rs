//! Enterprise Assistant: a tier- and severity-aware chat backend
//!
//! Forwards user conversations to a hosted chat-completion deployment,
//! optionally grounding the prompt with web-search snippets, and serves
//! synthetic analytics for the dashboard UI.

pub mod agent;
pub mod config;
pub mod dashboard;
pub mod llm;
pub mod network;
pub mod search;
pub mod web;

pub use agent::{AgentError, ConversationOrchestrator, EmbeddingProvider, RequestContext};
pub use config::Settings;
pub use llm::{ChatMessage, Role};
pub use search::SearchTool;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for outbound requests in seconds
pub const DEFAULT_TIMEOUT: f64 = 30.0;

/// Fixed sampling temperature for chat completions
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed maximum completion length in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 800;
