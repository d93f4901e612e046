use leptos::prelude::*;

use crate::commands;
use crate::store::{run_command, use_list_view, use_screen_store};

/// Light/dark switch in the top corner
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_screen_store();
    let list_view = use_list_view();
    let dark_mode = move || list_view.get().dark_mode;

    view! {
        <button
            class="theme-toggle"
            title=move || if dark_mode() { "dark-mode" } else { "light-mode" }
            on:click=move |_| run_command(store, commands::toggle_theme())
        >
            {move || if dark_mode() { "🌙" } else { "☀️" }}
        </button>
    }
}
