//! Search Bar Component
//!
//! Filters the visible items by name.

use leptos::prelude::*;

use crate::commands;
use crate::store::{run_command, use_screen_store};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_screen_store();

    // The field owns its text; late replies must not rewrite it mid-typing
    let (query, set_query) = signal(String::new());

    view! {
        <input
            type="text"
            class="text-input search-input"
            placeholder="ค้นหา"
            prop:value=move || query.get()
            on:input=move |ev| {
                let text = event_target_value(&ev);
                set_query.set(text.clone());
                run_command(store, async move { commands::set_search_query(&text).await });
            }
        />
    }
}
