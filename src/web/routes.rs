//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.settings.server.static_dir);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        // API routes
        .route("/chat", post(handlers::chat))
        .route("/api/dashboard_data", get(handlers::dashboard_data))
        .route("/health", get(handlers::health))
        // Static assets
        .nest_service("/static", static_files)
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        // Add state
        .with_state(state)
}
