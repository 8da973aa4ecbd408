//! The summarize-and-notify flow, split into its two steps.

pub mod deliver;
pub mod summarize;

pub use deliver::deliver_summary;
pub use summarize::{SummarizeResult, summarize_pending};
