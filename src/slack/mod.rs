//! All Slack-specific functionality

pub mod client;
pub mod message_formatter;
pub mod response_builder;

// Re-export main types for convenience
pub use client::{Notifier, WebhookClient};
pub use message_formatter::{SUMMARY_HEADER, format_summary_message};
