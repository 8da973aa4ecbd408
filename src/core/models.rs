use serde::{Deserialize, Serialize};

use crate::errors::TodoError;

pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Returns the patch with its title trimmed, rejecting blank titles.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::ValidationError` if a title is present but blank.
    pub fn normalized(&self) -> Result<Self, TodoError> {
        let title = self.title.as_deref().map(normalize_title).transpose()?;
        Ok(Self {
            title,
            completed: self.completed,
        })
    }
}

/// Trims a title and rejects empty or whitespace-only input.
///
/// # Errors
///
/// Returns `TodoError::ValidationError` for blank titles.
pub fn normalize_title(raw: &str) -> Result<String, TodoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoError::ValidationError(TITLE_REQUIRED_MESSAGE.to_string()));
    }
    Ok(trimmed.to_string())
}
