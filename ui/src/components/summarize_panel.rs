//! Summarize Button Component
//!
//! Triggers `POST /summarize` and shows the outcome below the button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

pub const SUMMARY_SENT_MESSAGE: &str = "Summary sent to Slack!";
pub const SUMMARY_FAILED_MESSAGE: &str = "Failed to send summary.";

/// Failure messages render red, everything else green.
fn status_class(status: &str) -> &'static str {
    if status.contains("Failed") {
        "status status-error"
    } else {
        "status status-ok"
    }
}

fn button_label(loading: bool) -> &'static str {
    if loading {
        "Summarizing..."
    } else {
        "Summarize & Send to Slack"
    }
}

#[component]
pub fn SummarizePanel() -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (status, set_status) = signal(String::new());

    let send_summary = move |_| {
        set_loading.set(true);
        set_status.set(String::new());

        spawn_local(async move {
            match api::summarize().await {
                Ok(response) if !response.message.is_empty() => set_status.set(response.message),
                Ok(_) => set_status.set(SUMMARY_SENT_MESSAGE.to_string()),
                Err(e) => {
                    api::log_error(SUMMARY_FAILED_MESSAGE, &e);
                    set_status.set(SUMMARY_FAILED_MESSAGE.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="summarize-panel">
            <button on:click=send_summary disabled=move || loading.get()>
                {move || button_label(loading.get())}
            </button>
            <Show when=move || !status.get().is_empty()>
                <p class=move || status_class(&status.get())>{move || status.get()}</p>
            </Show>
        </div>
    }
}
