//! Web server module
//!
//! Provides the chat API, the dashboard data API and the HTML pages.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::{ChatParams, ChatReply, AGENT_UNAVAILABLE};
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
