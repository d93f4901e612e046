//! Clear All Button Component
//!
//! Inline confirmation before the whole list is wiped.

use leptos::prelude::*;

use crate::commands;
use crate::store::{run_command, use_screen_store};

/// Shows "ลบทั้งหมด" initially. When clicked, shows "ยืนยัน?" with ✓/✗ buttons.
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let store = use_screen_store();
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button class="clear-all-btn" on:click=move |_| set_confirming.set(true)>
                "ลบทั้งหมด"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">"ยืนยัน?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        run_command(store, commands::clear_all());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
