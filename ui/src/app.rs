//! Root component: add form, todo list and summarize panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{SummarizePanel, TodoForm, TodoList};
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn App() -> impl IntoView {
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Fetch on mount and whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_todos().await {
                Ok(loaded) => set_todos.set(loaded),
                Err(e) => api::log_error("Failed to fetch todos.", &e),
            }
        });
    });

    view! {
        <main class="container">
            <h1>"Todo Summary Assistant"</h1>
            <TodoForm />
            <TodoList todos=todos />
            <SummarizePanel />
        </main>
    }
}
