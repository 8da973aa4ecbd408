//! Payload builders for Slack incoming webhooks.

use serde_json::{Value, json};

/// Create a JSON payload for an incoming-webhook message
///
/// Slack incoming webhooks accept a JSON body whose `text` field holds the
/// message, formatted with Slack `mrkdwn`.
///
/// # Examples
///
/// ```
/// use todo_digest::slack::response_builder::create_webhook_payload;
///
/// let payload = create_webhook_payload("Todo Summary:\nAll done");
/// assert_eq!(payload["text"], "Todo Summary:\nAll done");
/// ```
#[must_use]
pub fn create_webhook_payload(text: &str) -> Value {
    json!({ "text": text })
}
