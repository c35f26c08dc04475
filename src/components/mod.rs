//! UI Components
//!
//! Leptos components of the order page.

mod cascading_select;
mod customer_section;
mod order_line_row;
mod order_form;

pub use cascading_select::CascadingSelect;
pub use customer_section::CustomerSection;
pub use order_line_row::OrderLineRow;
pub use order_form::OrderForm;
