use std::env;
use std::net::SocketAddr;

use url::Url;

use crate::errors::TodoError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Where todos are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    Postgres { database_url: String },
    InMemory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub slack_webhook_url: Url,
    pub storage: StorageMode,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::ConfigError` when a required variable is missing
    /// or a value cannot be parsed.
    pub fn from_env() -> Result<Self, TodoError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TodoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| TodoError::ConfigError(format!("{key} is not set")))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let slack_webhook_url = required("SLACK_WEBHOOK_URL")?;
        let slack_webhook_url = Url::parse(&slack_webhook_url)
            .map_err(|e| TodoError::ConfigError(format!("SLACK_WEBHOOK_URL: {e}")))?;

        let storage = match optional("STORAGE_MODE", "postgres").as_str() {
            "postgres" => StorageMode::Postgres {
                database_url: required("DATABASE_URL")?,
            },
            "in_memory" => StorageMode::InMemory,
            other => {
                return Err(TodoError::ConfigError(format!(
                    "STORAGE_MODE: unknown mode '{other}'"
                )));
            }
        };

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| TodoError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: optional("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            slack_webhook_url,
            storage,
            host: optional("HOST", DEFAULT_HOST),
            port,
            allowed_origin: optional("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
        })
    }

    /// # Errors
    ///
    /// Returns an error if `HOST:PORT` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, TodoError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| TodoError::ConfigError(format!("{}:{}: {e}", self.host, self.port)))
    }
}
