//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every mutation so the list is fetched again
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Refetch the full todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }
}
