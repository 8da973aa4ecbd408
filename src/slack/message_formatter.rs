/// Header placed on the first line of every summary notification.
pub const SUMMARY_HEADER: &str = "Todo Summary:";

/// Prefixes a generated summary with the notification header.
#[must_use]
pub fn format_summary_message(summary: &str) -> String {
    format!("{SUMMARY_HEADER}\n{summary}")
}
