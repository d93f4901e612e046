//! Shopping Screen
//!
//! The app's only screen: theme toggle, search, add form, list and total.

use leptos::prelude::*;

use crate::components::{ClearAllButton, ItemList, NewItemForm, SearchBar, ThemeToggle, TotalBar};
use crate::store::{load_once, store_is_loaded, use_list_view, use_screen_store};

#[component]
pub fn ShoppingScreen() -> impl IntoView {
    let store = use_screen_store();
    let list_view = use_list_view();

    // Load persisted items on mount
    Effect::new(move |_| load_once(store));

    let screen_class = move || {
        if list_view.get().dark_mode {
            "shopping-screen dark"
        } else {
            "shopping-screen"
        }
    };

    view! {
        <div class=screen_class>
            <ThemeToggle />
            <SearchBar />
            // Nothing that changes the list is shown before it is loaded
            <Show
                when=move || store_is_loaded(&store)
                fallback=|| view! { <p class="loading">"..."</p> }
            >
                <NewItemForm />
                <ItemList />
                <TotalBar />
                <ClearAllButton />
            </Show>
        </div>
    }
}
