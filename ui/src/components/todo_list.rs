//! Todo List Component
//!
//! One row per todo with a completion checkbox and a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoList(todos: ReadSignal<Vec<Todo>>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || todos.get()
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let id = todo.id;
    let completed = todo.completed;

    let toggle = move |_| {
        spawn_local(async move {
            match api::set_completed(id, !completed).await {
                Ok(_) => ctx.reload(),
                Err(e) => api::log_error("Failed to update todo.", &e),
            }
        });
    };

    let remove = move |_| {
        spawn_local(async move {
            match api::delete_todo(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => api::log_error("Failed to delete todo.", &e),
            }
        });
    };

    view! {
        <li class="todo-item">
            <label>
                <input type="checkbox" prop:checked=completed on:change=toggle />
                <span class:completed=completed>{todo.title}</span>
            </label>
            <button class="delete" on:click=remove>"Delete"</button>
        </li>
    }
}
