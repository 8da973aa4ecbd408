//! Wire types shared with the API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
}

/// Body of every API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct CompletedArgs {
    pub completed: bool,
}
