//! Shopping App Frontend App
//!
//! Shell hosting the single titled screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ShoppingScreen;
use crate::store::ScreenState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the screen store to all children
    provide_context(Store::new(ScreenState::default()));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Shopping App"</h1>
            </header>
            <ShoppingScreen />
        </div>
    }
}
