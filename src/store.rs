//! Order Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::NewCustomer;
use crate::toggle::CustomerMode;

/// Customer section and submit state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct OrderFormState {
    /// Registered-customer checkbox
    pub mode: CustomerMode,
    /// Selected existing customer (group A)
    pub customer: String,
    /// New customer fields (group B)
    pub new_customer: NewCustomer,
    /// Submit request in flight
    pub submitting: bool,
    /// Message of the last failed submit
    pub submit_error: Option<String>,
}

/// Type alias for the store
pub type OrderStore = Store<OrderFormState>;

/// Get the order store from context
pub fn use_order_store() -> OrderStore {
    expect_context::<OrderStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set one new-customer field
pub fn store_set_new_customer(store: &OrderStore, update: impl FnOnce(&mut NewCustomer)) {
    store.new_customer().update(update);
}

/// Read one new-customer field (tracked)
pub fn store_new_customer_field(store: &OrderStore, read: impl FnOnce(&NewCustomer) -> String) -> String {
    store.new_customer().with(read)
}
