use crate::errors::TodoError;
use crate::slack::{Notifier, format_summary_message};

/// Posts `summary` under the notification header.
///
/// # Errors
///
/// Propagates the notifier's failure unchanged.
pub async fn deliver_summary(notifier: &dyn Notifier, summary: &str) -> Result<(), TodoError> {
    notifier.notify(&format_summary_message(summary)).await
}
