//! HTTP bindings to the todo-digest API.
//!
//! Every call returns `Result<_, String>`; the string is only ever logged.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::{CompletedArgs, CreateTodoArgs, MessageBody, SummarizeResponse, Todo};

/// API root, baked in at build time.
pub const API_BASE: &str = match option_env!("TODO_API_BASE") {
    Some(base) => base,
    None => "http://localhost:3000",
};

fn url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

/// Passes 2xx responses through and turns anything else into the server's
/// `message`, or the bare status when the body has none.
async fn check_status(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<MessageBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_default();
    Err(format!("{status}: {message}"))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let response = Client::new()
        .get(url("/todos"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn create_todo(title: &str) -> Result<Todo, String> {
    let response = Client::new()
        .post(url("/todos"))
        .json(&CreateTodoArgs { title })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn set_completed(id: i32, completed: bool) -> Result<Todo, String> {
    let response = Client::new()
        .put(url(&format!("/todos/{id}")))
        .json(&CompletedArgs { completed })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn delete_todo(id: i32) -> Result<(), String> {
    let response = Client::new()
        .delete(url(&format!("/todos/{id}")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(response).await.map(|_| ())
}

pub async fn summarize() -> Result<SummarizeResponse, String> {
    let response = Client::new()
        .post(url("/summarize"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

/// Writes a failed call to the browser console.
pub fn log_error(action: &str, error: &str) {
    web_sys::console::error_1(&format!("{action} {error}").into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let joined = url("/todos/3");
        assert!(joined.ends_with("/todos/3"));
        assert!(!joined.contains("//todos"));
    }
}
