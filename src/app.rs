//! Order Form App
//!
//! Loads the page configuration and provides the shared state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::OrderForm;
use crate::config::OrderFormConfig;
use crate::context::OrderFormContext;
use crate::store::OrderFormState;

#[component]
pub fn App() -> impl IntoView {
    let config = OrderFormConfig::load();
    tracing::info!(
        categories = config.categories.len(),
        customers = config.customers.len(),
        "order form configured"
    );

    // Provide context to all children
    provide_context(OrderFormContext::new(config));
    provide_context(Store::new(OrderFormState::default()));

    view! {
        <div class="order-page">
            <h1>"Оформление заказа"</h1>
            <OrderForm />
        </div>
    }
}
