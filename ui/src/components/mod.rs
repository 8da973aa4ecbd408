//! UI Components

mod summarize_panel;
mod todo_form;
mod todo_list;

pub use summarize_panel::SummarizePanel;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
