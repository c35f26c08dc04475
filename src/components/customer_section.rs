//! Customer Section Component
//!
//! Registered-customer checkbox switching between the existing-customer
//! selector and the new-customer fields.

use leptos::prelude::*;

use crate::context::OrderFormContext;
use crate::models::NewCustomer;
use crate::store::{store_new_customer_field, store_set_new_customer, use_order_store, OrderFormStateStoreFields};
use crate::toggle::CustomerMode;

/// Fields of the new-customer group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CustomerField {
    FullName,
    PhoneNumber,
    Email,
    ContactInfo,
}

impl CustomerField {
    const ALL: [CustomerField; 4] = [
        CustomerField::FullName,
        CustomerField::PhoneNumber,
        CustomerField::Email,
        CustomerField::ContactInfo,
    ];

    fn id(self) -> &'static str {
        match self {
            CustomerField::FullName => "id_full_name",
            CustomerField::PhoneNumber => "id_phone_number",
            CustomerField::Email => "id_email",
            CustomerField::ContactInfo => "id_contact_info",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CustomerField::FullName => "ФИО",
            CustomerField::PhoneNumber => "Номер телефона",
            CustomerField::Email => "Email",
            CustomerField::ContactInfo => "Контактная информация",
        }
    }

    fn value(self, customer: &NewCustomer) -> &String {
        match self {
            CustomerField::FullName => &customer.full_name,
            CustomerField::PhoneNumber => &customer.phone_number,
            CustomerField::Email => &customer.email,
            CustomerField::ContactInfo => &customer.contact_info,
        }
    }

    fn value_mut(self, customer: &mut NewCustomer) -> &mut String {
        match self {
            CustomerField::FullName => &mut customer.full_name,
            CustomerField::PhoneNumber => &mut customer.phone_number,
            CustomerField::Email => &mut customer.email,
            CustomerField::ContactInfo => &mut customer.contact_info,
        }
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

/// One input of the new-customer group
#[component]
fn CustomerInput(field: CustomerField, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let store = use_order_store();
    let value = move || store_new_customer_field(&store, |customer| field.value(customer).clone());
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        store_set_new_customer(&store, |customer| *field.value_mut(customer) = text);
    };

    let input = if field == CustomerField::ContactInfo {
        view! {
            <textarea id=field.id() rows="2" cols="34" disabled=move || disabled.get() prop:value=value on:input=on_input />
        }
        .into_any()
    } else {
        view! {
            <input type="text" id=field.id() size="35" disabled=move || disabled.get() prop:value=value on:input=on_input />
        }
        .into_any()
    };

    view! {
        <div class="form-row">
            <label for=field.id()>{field.label()}</label>
            {input}
        </div>
    }
}

#[component]
pub fn CustomerSection() -> impl IntoView {
    let ctx = use_context::<OrderFormContext>().expect("OrderFormContext should be provided");
    let store = use_order_store();
    let customers = ctx.config.with_value(|config| config.customer_options());

    let groups = move || store.mode().get().groups();
    let existing_disabled = Signal::derive(move || !groups().existing.enabled);
    let new_disabled = Signal::derive(move || !groups().new.enabled);

    let on_toggle = move |ev: web_sys::Event| {
        let mode = CustomerMode::from_checked(event_target_checked(&ev));
        tracing::debug!(?mode, "customer mode changed");
        store.mode().set(mode);
    };

    view! {
        <fieldset class="module aligned customer">
            <div class="form-row">
                <input
                    type="checkbox"
                    id="id_reg"
                    prop:checked=move || store.mode().get().is_registered()
                    on:change=on_toggle
                />
                <label for="id_reg">"Зарегистрированный покупатель"</label>
            </div>
            <div id="sel_cus" style:display=move || display(groups().existing.visible)>
                <div class="form-row">
                    <label for="id_customer">"Покупатель"</label>
                    <select
                        id="id_customer"
                        disabled=move || existing_disabled.get()
                        on:change=move |ev| store.customer().set(event_target_value(&ev))
                    >
                        {customers.into_iter().map(|option| {
                            let value = option.value.clone();
                            view! {
                                <option value=option.value selected=move || store.customer().get() == value>
                                    {option.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div id="reg_cus" style:display=move || display(groups().new.visible)>
                {CustomerField::ALL.into_iter().map(|field| view! {
                    <CustomerInput field=field disabled=new_disabled />
                }).collect_view()}
            </div>
        </fieldset>
    }
}
