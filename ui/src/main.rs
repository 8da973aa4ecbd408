//! todo-digest browser client entry point

mod api;
mod app;
mod components;
mod context;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
