//! Embedding generation with absent-on-failure semantics

use crate::llm::EmbeddingBackend;
use std::sync::Arc;
use tracing::warn;

/// Wraps an embedding backend; failures surface as `None`
#[derive(Clone)]
pub struct EmbeddingProvider {
    backend: Arc<dyn EmbeddingBackend>,
}

impl EmbeddingProvider {
    pub fn new(backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self { backend }
    }

    /// Embed `text`, returning `None` if the backend call fails
    pub async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        match self.backend.embed(text).await {
            Ok(vector) => Some(vector),
            Err(e) => {
                warn!("Error generating embedding: {}", e);
                None
            }
        }
    }
}
