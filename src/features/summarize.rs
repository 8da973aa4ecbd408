use tracing::info;

use crate::ai::Summarizer;
use crate::errors::TodoError;
use crate::infrastructure::persistence::TodoStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeResult {
    Summary(String),
    NoPendingTodos,
}

/// Reads pending todos and, if there are any, summarizes them.
///
/// The summarizer is never called for an empty set.
///
/// # Errors
///
/// Propagates store and summarizer failures unchanged.
pub async fn summarize_pending(
    store: &dyn TodoStore,
    summarizer: &dyn Summarizer,
) -> Result<SummarizeResult, TodoError> {
    let pending = store.list_pending().await?;
    if pending.is_empty() {
        return Ok(SummarizeResult::NoPendingTodos);
    }

    info!(pending = pending.len(), "Summarizing pending todos");
    let summary = summarizer.summarize(&pending).await?;
    Ok(SummarizeResult::Summary(summary))
}
