use leptos::prelude::*;

use crate::models::CURRENCY_LABEL;
use crate::store::use_list_view;

/// Running total of items still to buy
#[component]
pub fn TotalBar() -> impl IntoView {
    let list_view = use_list_view();

    view! {
        <p class="total">
            {move || format!("รวมราคาสินค้ายังไม่ได้ซื้อ: {} {}", list_view.get().total_remaining, CURRENCY_LABEL)}
        </p>
    }
}
