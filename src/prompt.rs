use crate::core::models::Todo;

/// Fixed instruction placed before the enumerated todo titles.
pub const SUMMARY_INSTRUCTION: &str =
    "Summarize these pending to-do items in a helpful, concise way:";

/// Returned when the model produces no candidate text.
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated.";

/// Builds the single-turn prompt for the summarization model.
///
/// Titles are enumerated as `"{index}. {title}"`, starting at 1, in the
/// order given.
#[must_use]
pub fn build_summary_prompt(todos: &[Todo]) -> String {
    let lines = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| format!("{}. {}", i + 1, todo.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{SUMMARY_INSTRUCTION}\n\n{lines}")
}
