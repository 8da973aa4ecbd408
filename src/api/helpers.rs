//! Common helper functions for API handlers.
//!
//! Every error leaves the service as `{"message": ...}` with a status code.
//! Validation and lookup failures carry a specific message; anything caused
//! by the database or a downstream API is logged in full and reported with
//! the caller-supplied generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::TodoError;

pub const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found.";
pub const NO_PENDING_TODOS_MESSAGE: &str = "No pending todos to summarize.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, TODO_NOT_FOUND_MESSAGE)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a domain error onto a response, hiding upstream detail behind
    /// `failure_message`.
    #[must_use]
    pub fn from_todo_error(error: TodoError, failure_message: &str) -> Self {
        match error {
            TodoError::ValidationError(message) => Self::bad_request(message),
            TodoError::NotFound(_) => Self::not_found(),
            TodoError::NothingToSummarize => Self::bad_request(NO_PENDING_TODOS_MESSAGE),
            other => {
                error!(error = %other, "{}", failure_message);
                Self::internal(failure_message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(MessageBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Parses a path id the way the route contract expects: anything that is
/// not an integer cannot name an existing todo.
///
/// # Errors
///
/// Returns a 404 `ApiError` for non-numeric ids.
pub fn parse_todo_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::not_found())
}
