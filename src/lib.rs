//! todo-digest - a todo list service that summarizes pending items with Gemini
//! and posts the summary to a Slack incoming webhook.
//!
//! # Architecture
//!
//! The service uses:
//! - axum for the JSON HTTP API
//! - sqlx with PostgreSQL for todo persistence
//! - reqwest for the Gemini and Slack webhook calls
//! - Tokio for async runtime
//!
//! Every collaborator is passed in through [`api::AppState`], so the HTTP
//! layer can be exercised with an in-memory store and recording clients.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_digest::ai::LlmClient;
//! use todo_digest::api::{AppState, build_router};
//! use todo_digest::infrastructure::persistence::InMemoryTodoStore;
//! use todo_digest::slack::WebhookClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     todo_digest::setup_logging();
//!
//!     let state = AppState::new(
//!         Arc::new(InMemoryTodoStore::new()),
//!         Arc::new(LlmClient::new(
//!             "dummy_gemini_key".to_string(),
//!             "https://generativelanguage.googleapis.com/v1".to_string(),
//!             "gemini-1.5-pro".to_string(),
//!         )),
//!         Arc::new(WebhookClient::new(
//!             "https://hooks.slack.com/services/T000/B000/XXXX".parse()?,
//!         )),
//!     );
//!
//!     let app = build_router(state, "http://localhost:5173")?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod infrastructure;
pub mod prompt;
pub mod slack;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "todo_digest=info,tower_http=info";

/// Configure structured logging with JSON format.
///
/// The filter comes from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. Call once at process start.
///
/// # Example
///
/// ```
/// todo_digest::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
