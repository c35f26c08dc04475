//! Cascading Select Component
//!
//! Category select paired with the item select it drives.
//! The pair is built together for one row, so the dependent control is
//! always known and is disposed together with the row.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_formset::RowId;

use crate::cascade::{CascadeState, LookupTicket, SyncOutcome, SyncStatus};
use crate::commands;
use crate::context::OrderFormContext;
use crate::error::RequestError;

/// Run one lookup and apply its result if it is still the latest
async fn run_lookup(
    dependent: RwSignal<CascadeState>,
    ticket: LookupTicket,
    url: Result<String, RequestError>,
    error_ms: u32,
) {
    let result = match url {
        Ok(url) => commands::fetch_options(&url).await,
        Err(err) => Err(err),
    };

    let Some(outcome) = dependent.try_update(|state| state.complete(ticket.seq, result)) else {
        tracing::debug!(seq = ticket.seq, "lookup finished after its row was removed");
        return;
    };

    match outcome {
        SyncOutcome::Applied { count } => {
            tracing::debug!(seq = ticket.seq, count, "item options replaced");
        }
        SyncOutcome::Stale { seq, latest } => {
            tracing::debug!(seq, latest, "dropped stale lookup response");
        }
        SyncOutcome::Failed(err) => {
            tracing::warn!(category = %ticket.value, "item lookup failed: {}", err);
            TimeoutFuture::new(error_ms).await;
            dependent.try_update(|state| state.dismiss_error(ticket.seq));
        }
    }
}

/// Category → item select pair of one order line
#[component]
pub fn CascadingSelect(id: RowId) -> impl IntoView {
    let ctx = use_context::<OrderFormContext>().expect("OrderFormContext should be provided");
    let (placeholder, items, lookup_param, error_ms, categories) = ctx.config.with_value(|config| {
        (
            config.placeholder.clone(),
            config.items.clone(),
            config.lookup_param.clone(),
            config.lookup_error_ms,
            config.category_options(),
        )
    });

    let dependent = RwSignal::new(CascadeState::with_options(placeholder, items));

    let on_parent_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        ctx.update_line(id, |line| {
            line.category = value.clone();
            line.item.clear();
        });

        let Some(ticket) = dependent.try_update(|state| state.begin(value)) else {
            return;
        };
        let url = commands::current_page_href()
            .map(|href| commands::lookup_url(&href, &lookup_param, &ticket.value));
        tracing::debug!(row = id.0, seq = ticket.seq, category = %ticket.value, "looking up items");
        spawn_local(run_lookup(dependent, ticket, url, error_ms));
    };

    let on_item_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        ctx.update_line(id, |line| line.item = value);
    };

    // Only this row's own fields, so edits elsewhere leave the option lists alone
    let selected_category = ctx.line_memo(id, |line| line.category.clone());
    let selected_item = ctx.line_memo(id, |line| line.item.clone());

    view! {
        <select class="category" on:change=on_parent_change>
            {categories.into_iter().map(|option| {
                let value = option.value.clone();
                view! {
                    <option value=option.value selected=move || selected_category.get() == value>
                        {option.label}
                    </option>
                }
            }).collect_view()}
        </select>
        <select
            class="item"
            class:loading=move || dependent.with(|state| state.status() == SyncStatus::Loading)
            required=true
            on:change=on_item_change
        >
            // Labels come from the server: rendered as text, never as markup
            {move || {
                let current = selected_item.get();
                dependent.with(|state| {
                    state.options().iter().map(|option| {
                        let selected = option.value == current;
                        view! {
                            <option value=option.value.clone() selected=selected>
                                {option.label.clone()}
                            </option>
                        }
                    }).collect_view()
                })
            }}
        </select>
        <Show when=move || dependent.with(|state| state.status() == SyncStatus::Failed)>
            <span
                class="lookup-error"
                title=move || dependent.with(|state| state.error().unwrap_or_default().to_string())
            >
                "Не удалось загрузить товары"
            </span>
        </Show>
    }
}
