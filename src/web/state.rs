//! Application state shared across handlers

use crate::agent::ConversationOrchestrator;
use crate::config::Settings;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Conversation pipeline; `None` when the chat provider is not configured
    pub agent: Option<Arc<ConversationOrchestrator>>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        agent: Option<ConversationOrchestrator>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            agent: agent.map(Arc::new),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Whether chat requests can be served
    pub fn agent_available(&self) -> bool {
        self.agent.is_some()
    }
}
