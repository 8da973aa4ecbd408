//! Slack incoming-webhook client module
//!
//! Delivers plain text messages to a preconfigured webhook URL.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};
use url::Url;

use super::response_builder::create_webhook_payload;
use crate::errors::TodoError;

/// Delivers a text message to the team chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), TodoError>;
}

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    webhook_url: Url,
}

impl WebhookClient {
    #[must_use]
    pub fn new(webhook_url: Url) -> Self {
        Self::with_http_client(Client::new(), webhook_url)
    }

    #[must_use]
    pub fn with_http_client(http: Client, webhook_url: Url) -> Self {
        Self { http, webhook_url }
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or Slack answers with a
    /// non-success status.
    pub async fn post_message(&self, message: &str) -> Result<(), TodoError> {
        let body = create_webhook_payload(message);

        let resp = self
            .http
            .post(self.webhook_url.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "Slack webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(TodoError::WebhookError(format!(
                "status {status}: {body_text}"
            )));
        }

        info!("Message delivered to Slack webhook");
        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookClient {
    async fn notify(&self, message: &str) -> Result<(), TodoError> {
        self.post_message(message).await
    }
}
