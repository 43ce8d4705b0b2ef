//! Enterprise Assistant server
//!
//! This is the main entry point for the application.

use anyhow::Result;
use enterprise_assistant::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
    ConversationOrchestrator,
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Enterprise Assistant v{}", enterprise_assistant::VERSION);

    // Load configuration
    let settings = config::load()?;

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!(
        "HTTP client initialized (timeout {:?})",
        client.timeout()
    );

    // The server still starts without chat credentials; /chat then reports
    // the agent as unavailable.
    let agent = match ConversationOrchestrator::from_settings(&settings, client) {
        Ok(agent) => Some(agent),
        Err(e) => {
            warn!("Failed to initialize conversation agent: {}", e);
            None
        }
    };

    // Create application state
    let state = AppState::new(settings.clone(), agent)?;
    info!("Application state initialized");

    let app = create_router(state);

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
