//! Router construction and shared handler state.

use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handler::{create_todo, delete_todo, list_todos, summarize, update_todo};
use crate::ai::Summarizer;
use crate::errors::TodoError;
use crate::infrastructure::persistence::TodoStore;
use crate::slack::Notifier;

/// Collaborators shared by every request. Nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub summarizer: Arc<dyn Summarizer>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: Arc<dyn TodoStore>,
        summarizer: Arc<dyn Summarizer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            summarizer,
            notifier,
        }
    }
}

/// CORS for the single browser origin allowed to call the API.
///
/// # Errors
///
/// Returns `TodoError::ConfigError` if `allowed_origin` is not a valid
/// header value or is the `*` wildcard, which cannot be used with
/// credentials.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, TodoError> {
    if allowed_origin.trim() == "*" {
        return Err(TodoError::ConfigError(
            "ALLOWED_ORIGIN: wildcard cannot be combined with credentials".to_string(),
        ));
    }
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| TodoError::ConfigError(format!("ALLOWED_ORIGIN: {e}")))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// Builds the full application router.
///
/// # Errors
///
/// Returns `TodoError::ConfigError` if the CORS origin is invalid.
pub fn build_router(state: AppState, allowed_origin: &str) -> Result<Router, TodoError> {
    let cors = cors_layer(allowed_origin)?;

    Ok(Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
