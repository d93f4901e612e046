//! Item Row Component
//!
//! Tap the row to toggle purchased, tap the button to remove.

use leptos::prelude::*;

use crate::commands;
use crate::models::{Item, CURRENCY_LABEL};
use crate::store::{run_command, use_screen_store};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_screen_store();

    let toggle_id = item.id.clone();
    let remove_id = item.id.clone();
    let label = format!("{} - {} {}", item.name, item.price, CURRENCY_LABEL);

    view! {
        <div
            class=if item.purchased { "item-row purchased" } else { "item-row" }
            on:click=move |_| {
                let id = toggle_id.clone();
                run_command(store, async move { commands::toggle_purchased(&id).await });
            }
        >
            <span class="item-text">{label}</span>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    let id = remove_id.clone();
                    run_command(store, async move { commands::remove_item(&id).await });
                }
            >
                "ลบ"
            </button>
        </div>
    }
}
