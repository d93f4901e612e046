use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::use_list_view;

/// Items matching the current search, in list order
#[component]
pub fn ItemList() -> impl IntoView {
    let list_view = use_list_view();

    view! {
        <div class="item-list">
            <For
                each=move || list_view.get().filtered_items
                key=|item| (item.id.clone(), item.purchased)
                children=move |item| view! { <ItemRow item=item /> }
            />
        </div>
    }
}
