//! Submission Serialization
//!
//! Turns the form into the `name=value` pairs the order view expects.
//! Only the customer group that is currently enabled is emitted; the
//! disabled group never reaches the server.

use leptos_formset::RowGroup;

use crate::commands::encode_pairs;
use crate::config::OrderFormConfig;
use crate::models::OrderLine;
use crate::store::OrderFormState;

/// Field names in submission order
pub fn serialize_order(
    config: &OrderFormConfig,
    form: &OrderFormState,
    lines: &RowGroup<OrderLine>,
) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut push = |name: &str, value: &str| fields.push((name.to_string(), value.to_string()));

    if let Some(token) = &config.csrf_token {
        push("csrfmiddlewaretoken", token);
    }

    if form.mode.is_registered() {
        push("reg", "on");
        push("customer", &form.customer);
    } else {
        let customer = &form.new_customer;
        push("full_name", &customer.full_name);
        push("phone_number", &customer.phone_number);
        push("email", &customer.email);
        push("contact_info", &customer.contact_info);
    }

    let prefix = &config.formset.prefix;
    push(&format!("{}-TOTAL_FORMS", prefix), &lines.len().to_string());
    push(&format!("{}-INITIAL_FORMS", prefix), "0");
    push(&format!("{}-MIN_NUM_FORMS", prefix), &lines.min_forms().to_string());
    push(&format!("{}-MAX_NUM_FORMS", prefix), &lines.max_forms().to_string());

    // Indices are positional, so deleted rows leave no gaps
    for (index, line) in lines.iter().enumerate() {
        push(&format!("{}-{}-category", prefix, index), &line.category);
        push(&format!("{}-{}-item", prefix, index), &line.item);
        push(&format!("{}-{}-count", prefix, index), &line.count);
    }

    fields
}

/// `application/x-www-form-urlencoded` body
pub fn encode_order(fields: &[(String, String)]) -> String {
    encode_pairs(fields.iter().map(|(name, value)| (name.as_str(), value.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCustomer;
    use crate::toggle::CustomerMode;

    fn value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
        fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn names(fields: &[(String, String)]) -> Vec<&str> {
        fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn lines(config: &OrderFormConfig, rows: &[(&str, &str, &str)]) -> RowGroup<OrderLine> {
        let mut group = RowGroup::new(OrderLine::default(), config.formset.min_forms, config.formset.max_forms);
        for (category, item, count) in rows {
            group.add_row(|line| {
                line.category = category.to_string();
                line.item = item.to_string();
                line.count = count.to_string();
            });
        }
        group
    }

    fn new_customer_form() -> OrderFormState {
        OrderFormState {
            mode: CustomerMode::New,
            customer: "7".to_string(),
            new_customer: NewCustomer {
                full_name: "Иван Петров".to_string(),
                phone_number: "+7 900".to_string(),
                email: "ivan@example.com".to_string(),
                contact_info: "".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_new_customer_fields_only() {
        let config = OrderFormConfig::default();
        let fields = serialize_order(&config, &new_customer_form(), &lines(&config, &[("1", "10", "1")]));

        assert_eq!(value(&fields, "full_name"), Some("Иван Петров"));
        assert_eq!(value(&fields, "contact_info"), Some(""));
        assert_eq!(value(&fields, "customer"), None);
        assert_eq!(value(&fields, "reg"), None);
    }

    #[test]
    fn test_registered_customer_fields_only() {
        let config = OrderFormConfig::default();
        let mut form = new_customer_form();
        form.mode = CustomerMode::Registered;
        let fields = serialize_order(&config, &form, &lines(&config, &[("1", "10", "1")]));

        assert_eq!(value(&fields, "reg"), Some("on"));
        assert_eq!(value(&fields, "customer"), Some("7"));
        for hidden in ["full_name", "phone_number", "email", "contact_info"] {
            assert_eq!(value(&fields, hidden), None);
        }
    }

    #[test]
    fn test_management_form_and_rows() {
        let config = OrderFormConfig::default();
        let group = lines(&config, &[("1", "10", "2"), ("", "11", "1")]);
        let fields = serialize_order(&config, &new_customer_form(), &group);

        assert_eq!(value(&fields, "form-TOTAL_FORMS"), Some("2"));
        assert_eq!(value(&fields, "form-INITIAL_FORMS"), Some("0"));
        assert_eq!(value(&fields, "form-MIN_NUM_FORMS"), Some("1"));
        assert_eq!(value(&fields, "form-MAX_NUM_FORMS"), Some("1000"));
        assert_eq!(value(&fields, "form-0-count"), Some("2"));
        assert_eq!(value(&fields, "form-1-category"), Some(""));
        assert_eq!(value(&fields, "form-1-item"), Some("11"));
    }

    #[test]
    fn test_rows_reindexed_after_delete() {
        let config = OrderFormConfig::default();
        let mut group = lines(&config, &[("1", "10", "1"), ("2", "20", "1"), ("3", "30", "1")]);
        let middle = group.ids()[1];
        group.delete_row(middle);
        let fields = serialize_order(&config, &new_customer_form(), &group);

        assert_eq!(value(&fields, "form-TOTAL_FORMS"), Some("2"));
        assert_eq!(value(&fields, "form-1-item"), Some("30"));
        assert_eq!(value(&fields, "form-2-item"), None);
    }

    #[test]
    fn test_csrf_token_first() {
        let config = OrderFormConfig { csrf_token: Some("tok".to_string()), ..Default::default() };
        let fields = serialize_order(&config, &new_customer_form(), &lines(&config, &[]));
        assert_eq!(names(&fields)[0], "csrfmiddlewaretoken");
        assert_eq!(value(&fields, "form-TOTAL_FORMS"), Some("0"));
    }

    #[test]
    fn test_encode_order() {
        let fields = vec![
            ("reg".to_string(), "on".to_string()),
            ("customer".to_string(), "7".to_string()),
            ("form-0-count".to_string(), "1".to_string()),
        ];
        assert_eq!(encode_order(&fields), "reg=on&customer=7&form-0-count=1");
    }
}
