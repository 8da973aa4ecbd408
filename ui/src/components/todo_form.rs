//! New Todo Form Component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match api::create_todo(&title).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    ctx.reload();
                }
                Err(e) => api::log_error("Failed to add todo.", &e),
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
