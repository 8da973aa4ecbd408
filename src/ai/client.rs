//! LLM (Gemini) API client module
//!
//! Encapsulates the generative-text API call used to summarize pending todos.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::models::Todo;
use crate::errors::TodoError;
use crate::prompt::{NO_SUMMARY_FALLBACK, build_summary_prompt};

/// Turns a set of pending todos into prose.
///
/// Callers must not pass an empty slice.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, todos: &[Todo]) -> Result<String, TodoError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// First part of the first candidate, or the fallback when there is none.
pub(crate) fn extract_summary_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
        .map_or_else(|| NO_SUMMARY_FALLBACK.to_string(), ToString::to_string)
}

/// Gemini `generateContent` client for generating summaries
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
    api_base: String,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, api_base: String, model_name: String) -> Self {
        Self::with_http_client(Client::new(), api_key, api_base, model_name)
    }

    #[must_use]
    pub fn with_http_client(
        http: Client,
        api_key: String,
        api_base: String,
        model_name: String,
    ) -> Self {
        Self {
            http,
            api_key,
            api_base,
            model_name,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_name
        )
    }

    /// Sends `prompt` as the sole user turn and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn generate_summary(&self, prompt: &str) -> Result<String, TodoError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Generating summary"
        );

        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TodoError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(TodoError::LlmError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TodoError::LlmError(format!("Failed to parse Gemini response: {e}")))?;

        debug!(candidates = parsed.candidates.len(), "Gemini response received");

        Ok(extract_summary_text(&parsed))
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, todos: &[Todo]) -> Result<String, TodoError> {
        let prompt = build_summary_prompt(todos);
        self.generate_summary(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_first_candidate_text() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second part" }] } },
                { "content": { "parts": [{ "text": "other candidate" }] } }
            ]
        }));
        assert_eq!(extract_summary_text(&response), "first");
    }

    #[test]
    fn test_extract_falls_back_without_candidates() {
        assert_eq!(extract_summary_text(&parse(json!({}))), NO_SUMMARY_FALLBACK);
        assert_eq!(
            extract_summary_text(&parse(json!({ "candidates": [] }))),
            NO_SUMMARY_FALLBACK
        );
    }

    #[test]
    fn test_extract_falls_back_on_missing_or_empty_text() {
        let no_content = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert_eq!(extract_summary_text(&no_content), NO_SUMMARY_FALLBACK);

        let empty_text = parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }));
        assert_eq!(extract_summary_text(&empty_text), NO_SUMMARY_FALLBACK);
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = LlmClient::new(
            "k".to_string(),
            "https://generativelanguage.googleapis.com/v1/".to_string(),
            "gemini-1.5-pro".to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-pro:generateContent"
        );
    }
}
