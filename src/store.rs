//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The backend owns the real state; this holds its latest snapshot.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use crate::models::ListView;

#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Latest snapshot returned by the backend
    pub view: ListView,
    /// Whether the initial load has completed
    pub loaded: bool,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

/// Get the screen store from context
pub fn use_screen_store() -> ScreenStore {
    expect_context::<ScreenStore>()
}

/// Reactive view of the latest snapshot
pub fn use_list_view() -> Signal<ListView> {
    let store = use_screen_store();
    Signal::derive(move || store.view().get())
}

pub fn store_is_loaded(store: &ScreenStore) -> bool {
    store.loaded().get()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the snapshot with one returned by a command
pub fn store_apply_view(store: &ScreenStore, view: ListView) {
    store.view().set(view);
}

/// Run a list command in the background and apply its result.
/// Errors are shown in a blocking alert.
pub fn run_command<F>(store: ScreenStore, command: F)
where
    F: Future<Output = Result<ListView, String>> + 'static,
{
    spawn_local(async move {
        match command.await {
            Ok(view) => store_apply_view(&store, view),
            Err(e) => show_error(&e),
        }
    });
}

/// Load the persisted list once on startup
pub fn load_once(store: ScreenStore) {
    if store.loaded().get_untracked() {
        return;
    }
    spawn_local(async move {
        match crate::commands::load_list().await {
            Ok(view) => {
                web_sys::console::log_1(&format!("[STORE] Loaded {} items", view.items.len()).into());
                store_apply_view(&store, view);
            }
            Err(e) => web_sys::console::error_1(&format!("[STORE] Load failed: {}", e).into()),
        }
        store.loaded().set(true);
    });
}

fn show_error(message: &str) {
    web_sys::console::error_1(&format!("[STORE] {}", message).into());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("ข้อผิดพลาด: {}", message));
    }
}
