//! Persistence layer abstractions.
//!
//! `TodoStore` is the data access interface handed to the HTTP layer; the
//! PostgreSQL and in-memory backends implement it with the same semantics.

pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::models::{Todo, TodoPatch};
use crate::errors::TodoError;

pub use in_memory::InMemoryTodoStore;
pub use postgres::PostgresTodoStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, most recently created first.
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;

    /// Todos with `completed = false`, in creation order.
    async fn list_pending(&self) -> Result<Vec<Todo>, TodoError>;

    /// Persists a new, not yet completed todo with the trimmed `title`.
    async fn create(&self, title: &str) -> Result<Todo, TodoError>;

    async fn delete(&self, id: i32) -> Result<(), TodoError>;

    /// Applies only the fields present in `patch`.
    async fn update(&self, id: i32, patch: &TodoPatch) -> Result<Todo, TodoError>;
}
