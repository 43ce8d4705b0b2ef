//! Conversation orchestration: route, ground, prompt, complete

use super::context::RequestContext;
use super::embedding::EmbeddingProvider;
use super::prompt::{assemble_messages, build_system_prompt};
use super::routing::{KeywordRouter, SearchRouter};
use super::{AgentError, FALLBACK_RESPONSE};
use crate::config::Settings;
use crate::llm::{AzureOpenAiClient, ChatCompletion, ChatMessage};
use crate::network::HttpClient;
use crate::search::{SearchTool, WebSearch};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Stateless pipeline turning a conversation into an assistant reply.
/// Safe to share across concurrent requests.
#[derive(Clone)]
pub struct ConversationOrchestrator {
    chat: Arc<dyn ChatCompletion>,
    search: Arc<dyn WebSearch>,
    router: Arc<dyn SearchRouter>,
    embeddings: Option<EmbeddingProvider>,
}

impl ConversationOrchestrator {
    /// Create an orchestrator with the keyword router and no embeddings
    pub fn new(chat: Arc<dyn ChatCompletion>, search: Arc<dyn WebSearch>) -> Self {
        Self {
            chat,
            search,
            router: Arc::new(KeywordRouter::new()),
            embeddings: None,
        }
    }

    /// Wire the hosted chat/embedding client and the search tool from settings.
    /// Fails when the chat provider credentials are missing.
    pub fn from_settings(settings: &Settings, client: HttpClient) -> anyhow::Result<Self> {
        let azure = Arc::new(AzureOpenAiClient::from_settings(
            &settings.azure,
            client.clone(),
        )?);
        let search = SearchTool::new(&settings.search, client);

        info!(
            "Orchestrator ready (chat deployment: {}, search configured: {})",
            azure.chat_deployment().unwrap_or("<unset>"),
            search.is_configured()
        );

        let mut orchestrator = Self::new(azure.clone(), Arc::new(search));
        if azure.embedding_deployment().is_some() {
            orchestrator = orchestrator.with_embeddings(EmbeddingProvider::new(azure));
        }

        Ok(orchestrator)
    }

    /// Replace the search routing strategy
    pub fn with_router(mut self, router: Arc<dyn SearchRouter>) -> Self {
        self.router = router;
        self
    }

    /// Attach an embedding provider
    pub fn with_embeddings(mut self, embeddings: EmbeddingProvider) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    /// Produce a reply for `query`. The live query must already be the last
    /// entry of `history`; it is only used here for search routing.
    pub async fn respond(
        &self,
        query: &str,
        context: &RequestContext,
        history: &[ChatMessage],
    ) -> Result<String, AgentError> {
        let search_context = if self.router.needs_search(query) {
            debug!("Query routed to web search");
            self.search.search(query).await
        } else {
            String::new()
        };

        let system_prompt = build_system_prompt(context, &search_context);
        let messages = assemble_messages(system_prompt, history);

        debug!(
            tier = %context.tier,
            severity = %context.severity,
            "Sending {} messages to chat completion",
            messages.len()
        );

        let answer = self.chat.complete(&messages).await?;

        if answer.trim().is_empty() {
            return Err(AgentError::EmptyAnswer);
        }

        Ok(answer)
    }

    /// Text adapter over [`respond`](Self::respond): any error is logged and
    /// replaced by the fixed apology, so the result is never empty.
    pub async fn respond_text(
        &self,
        query: &str,
        context: &RequestContext,
        history: &[ChatMessage],
    ) -> String {
        match self.respond(query, context, history).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("An error occurred while responding: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    /// Embed `text`; `None` when no embedding deployment is configured or the
    /// call fails
    pub async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        match &self.embeddings {
            Some(provider) => provider.embed(text).await,
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::routing::NoSearch;
    use crate::llm::{LlmError, Role};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every call and returns a canned answer or error
    #[derive(Default)]
    struct FakeChat {
        calls: Mutex<Vec<Vec<ChatMessage>>>,
        answer: Option<String>,
    }

    impl FakeChat {
        fn answering(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn last_messages(&self) -> Vec<ChatMessage> {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeChat {
        async fn complete(&self, messages: &[ChatMessage]) -> crate::llm::Result<String> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.answer
                .clone()
                .ok_or_else(|| LlmError::NetworkError("connection reset".to_string()))
        }
    }

    struct FakeSearch {
        calls: AtomicUsize,
        result: String,
    }

    impl FakeSearch {
        fn returning(result: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: result.to_string(),
            }
        }
    }

    #[async_trait]
    impl WebSearch for FakeSearch {
        async fn search(&self, _query: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn setup(
        chat: FakeChat,
        search: FakeSearch,
    ) -> (ConversationOrchestrator, Arc<FakeChat>, Arc<FakeSearch>) {
        let chat = Arc::new(chat);
        let search = Arc::new(search);
        let orchestrator = ConversationOrchestrator::new(chat.clone(), search.clone());
        (orchestrator, chat, search)
    }

    #[tokio::test]
    async fn test_who_is_triggers_search() {
        let (orchestrator, chat, search) = setup(
            FakeChat::answering("She was a mathematician."),
            FakeSearch::returning("Ada Lovelace was an English mathematician."),
        );
        let query = "Who is Ada Lovelace?";
        let history = vec![ChatMessage::user(query)];
        let ctx = RequestContext::new("enterprise", "low");

        let answer = orchestrator.respond(query, &ctx, &history).await.unwrap();

        assert_eq!(answer, "She was a mathematician.");
        assert_eq!(search.calls.load(Ordering::SeqCst), 1);

        let sent = chat.last_messages();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].role, Role::System);
        assert!(sent[0].content.contains("ENTERPRISE"));
        assert!(sent[0].content.contains("LOW"));
        assert!(sent[0]
            .content
            .contains("Ada Lovelace was an English mathematician."));
        assert_eq!(sent[1], ChatMessage::user(query));
    }

    #[tokio::test]
    async fn test_other_queries_skip_search() {
        let (orchestrator, chat, search) =
            setup(FakeChat::answering("Try rebooting."), FakeSearch::returning("x"));
        let query = "My VPN keeps dropping";
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Hi, how can I help?"),
            ChatMessage::user(query),
        ];

        let answer = orchestrator
            .respond(query, &RequestContext::new("free", "critical"), &history)
            .await
            .unwrap();

        assert_eq!(answer, "Try rebooting.");
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);

        let sent = chat.last_messages();
        assert_eq!(sent.len(), 4);
        assert_eq!(&sent[1..], &history[..]);
        assert!(sent[0].content.ends_with("**Search Context:**\n"));
    }

    #[tokio::test]
    async fn test_search_sentinel_still_reaches_prompt() {
        let (orchestrator, chat, _search) = setup(
            FakeChat::answering("ok"),
            FakeSearch::returning("Error performing search: timed out"),
        );
        let query = "what is a kernel panic";

        orchestrator
            .respond(query, &RequestContext::default(), &[ChatMessage::user(query)])
            .await
            .unwrap();

        assert_eq!(chat.call_count(), 1);
        assert!(chat.last_messages()[0]
            .content
            .contains("Error performing search: timed out"));
    }

    #[tokio::test]
    async fn test_chat_failure_is_structured() {
        let (orchestrator, _chat, _search) =
            setup(FakeChat::failing(), FakeSearch::returning("x"));

        let err = orchestrator
            .respond("hi", &RequestContext::default(), &[ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Llm(LlmError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_respond_text_falls_back() {
        let (orchestrator, _chat, search) = setup(
            FakeChat::failing(),
            FakeSearch::returning("Error performing search: refused"),
        );
        let query = "What is the status page?";

        let text = orchestrator
            .respond_text(query, &RequestContext::default(), &[ChatMessage::user(query)])
            .await;

        assert_eq!(text, FALLBACK_RESPONSE);
        assert_eq!(search.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_answer_falls_back() {
        let (orchestrator, _chat, _search) =
            setup(FakeChat::answering("   "), FakeSearch::returning("x"));

        let err = orchestrator
            .respond("hi", &RequestContext::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::EmptyAnswer));

        let text = orchestrator
            .respond_text("hi", &RequestContext::default(), &[])
            .await;
        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn test_custom_router() {
        let (orchestrator, _chat, search) =
            setup(FakeChat::answering("ok"), FakeSearch::returning("x"));
        let orchestrator = orchestrator.with_router(Arc::new(NoSearch));

        orchestrator
            .respond("what is rust", &RequestContext::default(), &[])
            .await
            .unwrap();

        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_embed_without_provider() {
        let (orchestrator, _chat, _search) =
            setup(FakeChat::answering("ok"), FakeSearch::returning("x"));
        assert!(orchestrator.embed("text").await.is_none());
    }

    #[test]
    fn test_from_settings_requires_credentials() {
        let settings = Settings::default();
        let result = ConversationOrchestrator::from_settings(&settings, HttpClient::new().unwrap());
        assert!(result.is_err());
    }
}
