//! todo-digest HTTP API entry point.
//!
//! See `todo_digest::core::config` for the environment variables read at
//! startup. A `.env` file in the working directory is loaded first.

use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use todo_digest::ai::LlmClient;
use todo_digest::api::{AppState, build_router};
use todo_digest::core::config::{AppConfig, StorageMode};
use todo_digest::infrastructure::persistence::{InMemoryTodoStore, PostgresTodoStore, TodoStore};
use todo_digest::slack::WebhookClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    todo_digest::setup_logging();

    let config = AppConfig::from_env().context("Config error")?;

    let (store, pool): (Arc<dyn TodoStore>, Option<PgPool>) = match &config.storage {
        StorageMode::Postgres { database_url } => {
            let store = PostgresTodoStore::connect(database_url)
                .await
                .context("Failed to initialize PostgreSQL store")?;
            let pool = store.pool().clone();
            (Arc::new(store), Some(pool))
        }
        StorageMode::InMemory => {
            warn!("Using in-memory storage; todos are lost on restart");
            (Arc::new(InMemoryTodoStore::new()), None)
        }
    };

    let summarizer = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
        config.gemini_model.clone(),
    );
    let notifier = WebhookClient::new(config.slack_webhook_url.clone());

    let state = AppState::new(store, Arc::new(summarizer), Arc::new(notifier));
    let application = build_router(state, &config.allowed_origin)?;

    let address = config.socket_addr()?;
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind to address {address}"))?;

    match listener.local_addr() {
        Ok(address) => info!("Backend running at http://{}", address),
        Err(error) => warn!(%error, "Could not determine local address"),
    }

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Completes on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
