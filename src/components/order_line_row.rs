//! Order Line Row Component
//!
//! Fields of one formset row: category/item pair and count.

use leptos::prelude::*;
use leptos_formset::RowId;

use crate::components::CascadingSelect;
use crate::context::OrderFormContext;

#[component]
pub fn OrderLineRow(id: RowId) -> impl IntoView {
    let ctx = use_context::<OrderFormContext>().expect("OrderFormContext should be provided");
    let count = ctx.line_memo(id, |line| line.count.clone());

    view! {
        <div class="order-line">
            <CascadingSelect id=id />
            <input
                type="number"
                class="count"
                min="1"
                required=true
                prop:value=move || count.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.update_line(id, |line| line.count = value);
                }
            />
        </div>
    }
}
