use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Todo {0} not found")]
    NotFound(i32),

    #[error("No pending todos to summarize")]
    NothingToSummarize,

    #[error("Failed to access database: {0}")]
    DatabaseError(String),

    #[error("Failed to access Gemini API: {0}")]
    LlmError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to deliver Slack webhook: {0}")]
    WebhookError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for TodoError {
    fn from(error: reqwest::Error) -> Self {
        TodoError::HttpError(error.to_string())
    }
}

impl From<sqlx::Error> for TodoError {
    fn from(error: sqlx::Error) -> Self {
        TodoError::DatabaseError(error.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for TodoError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        TodoError::DatabaseError(format!("migration failed: {error}"))
    }
}
