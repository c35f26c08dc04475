//! Order Form Component
//!
//! Customer section, order line formset and submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_formset::{Formset, RowId};

use crate::commands;
use crate::components::{CustomerSection, OrderLineRow};
use crate::context::{fill_numeric_inputs, OrderFormContext};
use crate::models::OrderLine;
use crate::store::{use_order_store, OrderFormStateStoreFields};
use crate::submission::{encode_order, serialize_order};

#[component]
pub fn OrderForm() -> impl IntoView {
    let ctx = use_context::<OrderFormContext>().expect("OrderFormContext should be provided");
    let store = use_order_store();

    let formset_config = ctx.config.with_value(|config| config.formset.clone());
    let default_count = ctx.config.with_value(|config| config.default_count.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.submitting().get_untracked() {
            return;
        }

        let fields = ctx.config.with_value(|config| {
            store.with_untracked(|form| ctx.lines.with_untracked(|lines| serialize_order(config, form, lines)))
        });
        tracing::info!(lines = ctx.lines.with_untracked(|lines| lines.len()), "submitting order");
        let body = encode_order(&fields);

        store.submitting().set(true);
        store.submit_error().set(None);
        spawn_local(async move {
            if let Err(err) = commands::send_order(body).await {
                tracing::warn!("order submit failed: {}", err);
                store.submit_error().set(Some(format!("Не удалось отправить заказ: {}", err)));
            }
            store.submitting().set(false);
        });
    };

    view! {
        <form class="order-form" on:submit=on_submit>
            <CustomerSection />
            <fieldset class="module order-formset">
                <Formset
                    rows=ctx.lines
                    config=formset_config
                    on_row_added=move |line: &mut OrderLine| fill_numeric_inputs(line, &default_count)
                    row=|id: RowId| view! { <OrderLineRow id=id /> }
                />
            </fieldset>
            {move || store.submit_error().get().map(|message| view! {
                <p class="errornote">{message}</p>
            })}
            <div class="submit-row">
                <button type="submit" disabled=move || store.submitting().get()>
                    "Оформить заказ"
                </button>
            </div>
        </form>
    }
}
