//! Route handlers.
//!
//! Each handler performs exactly one store operation, or the summarize flow,
//! and serializes the result.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::helpers::{ApiError, INVALID_BODY_MESSAGE, parse_todo_id};
use super::router::AppState;
use crate::core::models::{TITLE_REQUIRED_MESSAGE, Todo, TodoPatch};
use crate::errors::TodoError;
use crate::features::{SummarizeResult, deliver_summary, summarize_pending};

pub const SUMMARY_SENT_MESSAGE: &str = "Summary sent to Slack!";
pub const SUMMARIZE_FAILURE_MESSAGE: &str = "Failed to summarize and send to Slack.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub message: String,
    pub summary: String,
}

/// `GET /todos`
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    state
        .store
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_todo_error(e, "Failed to fetch todos."))
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = match payload {
        Ok(Json(CreateTodoRequest { title: Some(title) })) => title,
        Ok(_) => return Err(ApiError::bad_request(TITLE_REQUIRED_MESSAGE)),
        Err(rejection) => {
            info!(%rejection, "Rejected create request body");
            return Err(ApiError::bad_request(TITLE_REQUIRED_MESSAGE));
        }
    };

    let todo = state
        .store
        .create(&title)
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to add todo."))?;

    info!(id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_todo_id(&raw_id)?;

    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to delete todo."))?;

    info!(id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_todo_id(&raw_id)?;
    let Json(patch) = payload.map_err(|rejection| {
        info!(%rejection, "Rejected update request body");
        ApiError::bad_request(INVALID_BODY_MESSAGE)
    })?;

    state
        .store
        .update(id, &patch)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_todo_error(e, "Failed to update todo."))
}

/// `POST /summarize`
///
/// Reads pending todos, summarizes them and posts the result to Slack. Any
/// downstream failure is reported with one generic message; the cause only
/// reaches the logs.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(correlation_id = %uuid::Uuid::new_v4())
)]
pub async fn summarize(
    State(state): State<AppState>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let summary = match summarize_pending(state.store.as_ref(), state.summarizer.as_ref()).await {
        Ok(SummarizeResult::Summary(summary)) => summary,
        Ok(SummarizeResult::NoPendingTodos) => {
            info!("No pending todos to summarize");
            return Err(ApiError::from_todo_error(
                TodoError::NothingToSummarize,
                SUMMARIZE_FAILURE_MESSAGE,
            ));
        }
        Err(e) => {
            error!("Failed to generate summary: {}", e);
            return Err(ApiError::internal(SUMMARIZE_FAILURE_MESSAGE));
        }
    };

    if let Err(e) = deliver_summary(state.notifier.as_ref(), &summary).await {
        error!("Failed to deliver summary: {}", e);
        return Err(ApiError::internal(SUMMARIZE_FAILURE_MESSAGE));
    }

    info!("Summary sent to Slack");
    Ok(Json(SummarizeResponse {
        message: SUMMARY_SENT_MESSAGE.to_string(),
        summary,
    }))
}
