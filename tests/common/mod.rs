//! Shared helpers for integration tests.
//!
//! Each integration test file is compiled as its own crate, so helpers used
//! by only some of them would otherwise trigger dead code warnings.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_digest::ai::Summarizer;
use todo_digest::api::{AppState, build_router};
use todo_digest::core::models::Todo;
use todo_digest::errors::TodoError;
use todo_digest::infrastructure::persistence::InMemoryTodoStore;
use todo_digest::slack::Notifier;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Summarizer double that records every call.
pub struct RecordingSummarizer {
    calls: Mutex<Vec<Vec<Todo>>>,
    reply: Result<String, String>,
}

impl RecordingSummarizer {
    pub fn replying(summary: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(summary.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(reason.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Todo>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    async fn summarize(&self, todos: &[Todo]) -> Result<String, TodoError> {
        self.calls.lock().unwrap().push(todos.to_vec());
        self.reply.clone().map_err(TodoError::LlmError)
    }
}

/// Notifier double that records every message.
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> Result<(), TodoError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            return Err(TodoError::WebhookError("status 500: boom".to_string()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryTodoStore>,
    pub summarizer: Arc<RecordingSummarizer>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_clients(
            RecordingSummarizer::replying("You need to buy milk and call Alice."),
            RecordingNotifier::accepting(),
        )
    }

    pub fn with_clients(summarizer: RecordingSummarizer, notifier: RecordingNotifier) -> Self {
        let store = Arc::new(InMemoryTodoStore::new());
        let summarizer = Arc::new(summarizer);
        let notifier = Arc::new(notifier);

        let state = AppState::new(store.clone(), summarizer.clone(), notifier.clone());
        let router = build_router(state, TEST_ORIGIN).expect("router should build");

        Self {
            router,
            store,
            summarizer,
            notifier,
        }
    }

    /// Sends one request through the router and decodes the JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn create(&self, title: &str) -> Todo {
        let (status, body) = self
            .send(
                Method::POST,
                "/todos",
                Some(serde_json::json!({ "title": title })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        serde_json::from_value(body).unwrap()
    }

    pub async fn list(&self) -> Vec<Todo> {
        let (status, body) = self.send(Method::GET, "/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body).unwrap()
    }
}
