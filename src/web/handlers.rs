//! HTTP request handlers

use super::state::AppState;
use crate::agent::RequestContext;
use crate::dashboard;
use crate::llm::ChatMessage;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Returned with HTTP 500 when the chat provider is not configured
pub const AGENT_UNAVAILABLE: &str = "AI Agent is not available. Please check server configuration.";

/// Body of a chat request
#[derive(Debug, Deserialize)]
pub struct ChatParams {
    /// Live user query
    pub query: Option<String>,
    /// Account tier label
    #[serde(default = "default_tier")]
    pub tier: String,
    /// Severity label
    #[serde(default = "default_severity")]
    pub severity: String,
    /// Prior turns, oldest first, without the live query
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

fn default_tier() -> String {
    "free".to_string()
}

fn default_severity() -> String {
    "low".to_string()
}

/// Successful chat reply
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorReply {
    pub error: String,
}

fn page(state: &AppState, template: &str) -> Response {
    let mut ctx = Context::new();
    ctx.insert("version", crate::VERSION);
    ctx.insert("agent_available", &state.agent_available());

    match state.templates.render_with_context(template, &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Chat page handler
pub async fn index(State(state): State<AppState>) -> Response {
    page(&state, "index.html")
}

/// Dashboard page handler
pub async fn dashboard(State(state): State<AppState>) -> Response {
    page(&state, "dashboard.html")
}

/// Chat API handler
pub async fn chat(State(state): State<AppState>, Json(params): Json<ChatParams>) -> Response {
    let agent = match state.agent.clone() {
        Some(agent) => agent,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    response: AGENT_UNAVAILABLE.to_string(),
                }),
            )
                .into_response()
        }
    };

    let query = match params.query {
        Some(q) if !q.is_empty() => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorReply {
                    error: "Query is required.".to_string(),
                }),
            )
                .into_response()
        }
    };

    let context = RequestContext::new(params.tier, params.severity);
    let mut history = params.history;
    history.push(ChatMessage::user(query.clone()));

    let span = info_span!("chat", request_id = %Uuid::new_v4(), tier = %context.tier);
    let response = async {
        tracing::info!("Handling chat request with {} turns", history.len());
        agent.respond_text(&query, &context, &history).await
    }
    .instrument(span)
    .await;

    Json(ChatReply { response }).into_response()
}

/// Synthetic dashboard data handler
pub async fn dashboard_data() -> impl IntoResponse {
    let data = {
        let mut rng = rand::thread_rng();
        dashboard::generate(chrono::Local::now(), &mut rng)
    };
    Json(data)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "agent_available": state.agent_available(),
    }))
}
