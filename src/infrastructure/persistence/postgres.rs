//! `PostgreSQL` todo store.
//!
//! Every operation is a single statement against the `todos` table, so each
//! is atomic at row granularity and nothing spans multiple records.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS todos (
//!     id SERIAL PRIMARY KEY,
//!     title TEXT NOT NULL,
//!     completed BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use super::TodoStore;
use crate::core::models::{Todo, TodoPatch, normalize_title};
use crate::errors::TodoError;

#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            completed: row.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresTodoStore {
    pool: PgPool,
}

impl PostgresTodoStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool to `database_url` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, TodoError> {
        let pool = PgPoolOptions::new().connect(database_url).await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    /// # Errors
    ///
    /// Returns an error if a migration fails to apply.
    pub async fn run_migrations(&self) -> Result<(), TodoError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PostgresTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, title, completed FROM todos ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn list_pending(&self) -> Result<Vec<Todo>, TodoError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            "SELECT id, title, completed FROM todos WHERE completed = FALSE ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, title: &str) -> Result<Todo, TodoError> {
        let title = normalize_title(title)?;
        let row: TodoRow = sqlx::query_as(
            "INSERT INTO todos (title, completed) VALUES ($1, FALSE) \
             RETURNING id, title, completed",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id));
        }
        Ok(())
    }

    async fn update(&self, id: i32, patch: &TodoPatch) -> Result<Todo, TodoError> {
        let patch = match patch.normalized() {
            Ok(patch) => patch,
            Err(error) => {
                // An unknown id is reported before an invalid body
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM todos WHERE id = $1)")
                        .bind(id)
                        .fetch_one(&self.pool)
                        .await?;
                return Err(if exists { error } else { TodoError::NotFound(id) });
            }
        };
        let row: Option<TodoRow> = sqlx::query_as(
            "UPDATE todos SET title = COALESCE($2, title), completed = COALESCE($3, completed) \
             WHERE id = $1 RETURNING id, title, completed",
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::from).ok_or(TodoError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests require a running PostgreSQL instance reachable through
    // DATABASE_URL. They are disabled by default.

    async fn connect() -> PostgresTodoStore {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/todo_digest_test".into());
        PostgresTodoStore::connect(&database_url).await.unwrap()
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn test_postgres_create_list_delete() {
        let store = connect().await;

        let created = store.create("  Postgres round trip  ").await.unwrap();
        assert_eq!(created.title, "Postgres round trip");
        assert!(!created.completed);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.first().map(|t| t.id), Some(created.id));

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.delete(created.id).await,
            Err(TodoError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn test_postgres_partial_update() {
        let store = connect().await;
        let created = store.create("Partial update").await.unwrap();

        let updated = store
            .update(
                created.id,
                &TodoPatch {
                    title: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Partial update");
        assert!(updated.completed);

        let pending = store.list_pending().await.unwrap();
        assert!(pending.iter().all(|t| t.id != created.id));

        store.delete(created.id).await.unwrap();
    }
}
