//! In-memory todo store.
//!
//! Mirrors the `PostgreSQL` store's semantics (serial ids, ordering,
//! validation) behind a `tokio::sync::RwLock`. Used by tests and by local
//! runs with `STORAGE_MODE=in_memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TodoStore;
use crate::core::models::{Todo, TodoPatch, normalize_title};
use crate::errors::TodoError;

#[derive(Debug)]
struct State {
    next_id: i32,
    todos: BTreeMap<i32, Todo>,
}

#[derive(Debug)]
pub struct InMemoryTodoStore {
    state: RwLock<State>,
}

impl InMemoryTodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: 1,
                todos: BTreeMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.todos.is_empty()
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let state = self.state.read().await;
        Ok(state.todos.values().rev().cloned().collect())
    }

    async fn list_pending(&self) -> Result<Vec<Todo>, TodoError> {
        let state = self.state.read().await;
        Ok(state
            .todos
            .values()
            .filter(|todo| !todo.completed)
            .cloned()
            .collect())
    }

    async fn create(&self, title: &str) -> Result<Todo, TodoError> {
        let title = normalize_title(title)?;
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let todo = Todo {
            id,
            title,
            completed: false,
        };
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: i32) -> Result<(), TodoError> {
        let mut state = self.state.write().await;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }

    async fn update(&self, id: i32, patch: &TodoPatch) -> Result<Todo, TodoError> {
        let mut state = self.state.write().await;
        let todo = state.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        let patch = patch.normalized()?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }
}
