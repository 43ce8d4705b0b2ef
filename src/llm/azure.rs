//! Azure OpenAI-compatible chat and embedding client

use super::{
    ChatCompletion, ChatMessage, ChatRequest, ChatResponse, EmbeddingBackend, EmbeddingRequest,
    EmbeddingResponse, LlmError, Result,
};
use crate::config::AzureSettings;
use crate::network::{HttpClient, HttpResponse};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Client for a hosted deployment reachable under
/// `{endpoint}/openai/deployments/{deployment}/...`
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: HttpClient,
    endpoint: Url,
    api_key: String,
    api_version: String,
    chat_deployment: Option<String>,
    embedding_deployment: Option<String>,
}

impl std::fmt::Debug for AzureOpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_version", &self.api_version)
            .field("chat_deployment", &self.chat_deployment)
            .field("embedding_deployment", &self.embedding_deployment)
            .finish_non_exhaustive()
    }
}

impl AzureOpenAiClient {
    /// Build a client from settings. Fails when the key or endpoint is missing
    /// or the endpoint is not a valid URL.
    pub fn from_settings(settings: &AzureSettings, client: HttpClient) -> anyhow::Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("AZURE_API_KEY is not configured"))?;
        let endpoint = settings
            .endpoint
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("AZURE_OPENAI_ENDPOINT is not configured"))?;

        let endpoint = Url::parse(endpoint.trim_end_matches('/'))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            api_version: settings.api_version.clone(),
            chat_deployment: settings.chat_deployment.clone(),
            embedding_deployment: settings.embedding_deployment.clone(),
        })
    }

    /// Chat deployment name, if configured
    pub fn chat_deployment(&self) -> Option<&str> {
        self.chat_deployment.as_deref()
    }

    /// Embedding deployment name, if configured
    pub fn embedding_deployment(&self) -> Option<&str> {
        self.embedding_deployment.as_deref()
    }

    /// Build the operation URL for a deployment
    fn deployment_url(&self, deployment: &str, operation: &str) -> Result<Url> {
        let base = format!(
            "{}/openai/deployments/{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            deployment,
            operation
        );
        Url::parse_with_params(&base, &[("api-version", self.api_version.as_str())])
            .map_err(|e| LlmError::ConfigurationMissing(format!("invalid endpoint: {}", e)))
    }

    async fn post<B: serde::Serialize>(&self, url: &Url, body: &B) -> Result<HttpResponse> {
        let response = self
            .client
            .post_json(url.as_str(), &[("api-key", self.api_key.as_str())], body)
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        if !response.is_success() {
            return Err(LlmError::ProviderError {
                status: response.status,
                body: response.text,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatCompletion for AzureOpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let deployment = self.chat_deployment.as_deref().ok_or_else(|| {
            LlmError::ConfigurationMissing("chat deployment name".to_string())
        })?;

        let url = self.deployment_url(deployment, "chat/completions")?;
        let request = ChatRequest {
            model: deployment.to_string(),
            messages: messages.to_vec(),
            temperature: crate::DEFAULT_TEMPERATURE,
            max_tokens: crate::DEFAULT_MAX_TOKENS,
        };

        debug!(
            "Chat completion on {} with {} messages",
            deployment,
            request.messages.len()
        );

        let response = self.post(&url, &request).await?;
        let body: ChatResponse = response
            .json()
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::ParseError("No choices in response".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| LlmError::ParseError("Empty content".to_string()))
    }
}

#[async_trait]
impl EmbeddingBackend for AzureOpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let deployment = self.embedding_deployment.as_deref().ok_or_else(|| {
            LlmError::ConfigurationMissing("embedding deployment name".to_string())
        })?;

        let url = self.deployment_url(deployment, "embeddings")?;
        let request = EmbeddingRequest {
            model: deployment,
            input: text,
        };

        let response = self.post(&url, &request).await?;
        let body: EmbeddingResponse = response
            .json()
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| LlmError::ParseError("No embedding in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(endpoint: &str) -> AzureSettings {
        AzureSettings {
            api_key: Some("test-key".to_string()),
            api_version: "2024-02-01".to_string(),
            endpoint: Some(endpoint.to_string()),
            chat_deployment: Some("chat-dep".to_string()),
            embedding_deployment: Some("embed-dep".to_string()),
        }
    }

    fn client(endpoint: &str) -> AzureOpenAiClient {
        AzureOpenAiClient::from_settings(&settings(endpoint), HttpClient::new().unwrap()).unwrap()
    }

    #[test]
    fn test_missing_key_or_endpoint() {
        let mut s = settings("https://example.openai.azure.com");
        s.api_key = None;
        assert!(AzureOpenAiClient::from_settings(&s, HttpClient::new().unwrap()).is_err());

        let mut s = settings("https://example.openai.azure.com");
        s.endpoint = None;
        assert!(AzureOpenAiClient::from_settings(&s, HttpClient::new().unwrap()).is_err());
    }

    #[test]
    fn test_deployment_url() {
        let c = client("https://example.openai.azure.com/");
        let url = c.deployment_url("chat-dep", "chat/completions").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.openai.azure.com/openai/deployments/chat-dep/chat/completions?api-version=2024-02-01"
        );
    }

    #[tokio::test]
    async fn test_chat_completion() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/deployments/chat-dep/chat/completions"))
            .and(query_param("api-version", "2024-02-01"))
            .and(header("api-key", "test-key"))
            .and(body_partial_json(json!({
                "model": "chat-dep",
                "max_tokens": 800,
                "messages": [{"role": "system", "content": "be brief"}, {"role": "user", "content": "hi"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Hello there"}},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let c = client(&server.uri());
        let messages = vec![ChatMessage::system("be brief"), ChatMessage::user("hi")];
        let text = c.complete(&messages).await.unwrap();

        assert_eq!(text, "Hello there");

        let received = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_chat_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let c = client(&server.uri());
        let err = c.complete(&[ChatMessage::user("hi")]).await.unwrap_err();

        match err {
            LlmError::ProviderError { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_without_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let c = client(&server.uri());
        let err = c.complete(&[ChatMessage::user("hi")]).await.unwrap_err();

        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_missing_chat_deployment() {
        let mut s = settings("https://example.openai.azure.com");
        s.chat_deployment = None;
        let c = AzureOpenAiClient::from_settings(&s, HttpClient::new().unwrap()).unwrap();

        let err = c.complete(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationMissing(_)));
    }

    #[tokio::test]
    async fn test_embedding() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/deployments/embed-dep/embeddings"))
            .and(body_partial_json(json!({"model": "embed-dep", "input": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"index": 0, "embedding": [0.25, -0.5, 1.0]}]
            })))
            .mount(&server)
            .await;

        let c = client(&server.uri());
        let vector = c.embed("hello").await.unwrap();
        assert_eq!(vector, vec![0.25, -0.5, 1.0]);
    }
}
