//! New Item Form Component
//!
//! Name and price inputs with the add button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{run_command, store_apply_view, use_screen_store};

/// Form for adding an item to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_screen_store();

    // Local copies so typing never waits on the backend
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_text = name.get_untracked();
        let price_text = price.get_untracked();

        spawn_local(async move {
            match commands::add_item(&name_text, &price_text).await {
                Ok(view) => {
                    set_name.set(view.draft_name.clone());
                    set_price.set(view.draft_price.clone());
                    store_apply_view(&store, view);
                }
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&format!("ข้อผิดพลาด: {}", e));
                    }
                }
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                class="text-input"
                placeholder="ชื่อสินค้า"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_name.set(text.clone());
                    run_command(store, async move { commands::set_draft_name(&text).await });
                }
            />
            <input
                type="text"
                inputmode="decimal"
                class="text-input"
                placeholder="ราคาสินค้า"
                prop:value=move || price.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_price.set(text.clone());
                    run_command(store, async move { commands::set_draft_price(&text).await });
                }
            />
            <button type="submit" class="add-btn">"เพิ่มสินค้า"</button>
        </form>
    }
}
