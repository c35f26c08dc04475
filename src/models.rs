//! Frontend Models
//!
//! Option lists, lookup responses and the order form rows.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Label of the "no selection" option
pub const PLACEHOLDER_LABEL: &str = "---------";

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// The sentinel "no selection" option
    pub fn sentinel(placeholder: &str) -> Self {
        Self::new("", placeholder)
    }
}

/// Full replacement set for one dependent select, in server order.
///
/// The server answers with a JSON object (`{"pk": "name", ...}`), so this
/// deserializes from a map while keeping the document's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub entries: Vec<SelectOption>,
}

impl LookupResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'de> Deserialize<'de> for LookupResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedEntries;

        impl<'de> Visitor<'de> for OrderedEntries {
            type Value = LookupResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping option keys to labels")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, label)) = map.next_entry::<String, String>()? {
                    entries.push(SelectOption::new(key, label));
                }
                Ok(LookupResult { entries })
            }
        }

        deserializer.deserialize_map(OrderedEntries)
    }
}

/// Options rendered server-side into the page configuration,
/// accepted either as `[["1", "Phones"], ...]` or `[{"value": .., "label": ..}]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfiguredOption {
    Pair(String, String),
    Named(SelectOption),
}

impl From<ConfiguredOption> for SelectOption {
    fn from(option: ConfiguredOption) -> Self {
        match option {
            ConfiguredOption::Pair(value, label) => SelectOption::new(value, label),
            ConfiguredOption::Named(option) => option,
        }
    }
}

/// One order line of the formset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLine {
    /// Parent control value (category pk, may be empty)
    pub category: String,
    /// Dependent control value (stock pk, empty = sentinel)
    pub item: String,
    /// Numeric input
    pub count: String,
}

impl OrderLine {
    /// Every numeric input of the row
    pub fn numeric_inputs_mut(&mut self) -> impl Iterator<Item = &mut String> {
        std::iter::once(&mut self.count)
    }
}

/// Fields of the "new customer" group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub contact_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_result_keeps_server_order() {
        let result: LookupResult = serde_json::from_str(r#"{"3":"Beta","1":"Alpha"}"#).unwrap();
        assert_eq!(
            result.entries,
            vec![SelectOption::new("3", "Beta"), SelectOption::new("1", "Alpha")]
        );
    }

    #[test]
    fn test_lookup_result_empty_object() {
        let result: LookupResult = serde_json::from_str("{}").unwrap();
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_lookup_result_rejects_non_object() {
        assert!(serde_json::from_str::<LookupResult>(r#"["a","b"]"#).is_err());
        assert!(serde_json::from_str::<LookupResult>(r#"{"1": 2}"#).is_err());
        assert!(serde_json::from_str::<LookupResult>("not json").is_err());
    }

    #[test]
    fn test_lookup_result_keeps_duplicate_labels() {
        let result: LookupResult = serde_json::from_str(r#"{"1":"Same","2":"Same"}"#).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_configured_option_forms() {
        let options: Vec<ConfiguredOption> =
            serde_json::from_str(r#"[["1","Phones"],{"value":"2","label":"+--Smart"}]"#).unwrap();
        let options: Vec<SelectOption> = options.into_iter().map(Into::into).collect();
        assert_eq!(options[0], SelectOption::new("1", "Phones"));
        assert_eq!(options[1], SelectOption::new("2", "+--Smart"));
    }

    #[test]
    fn test_sentinel() {
        let sentinel = SelectOption::sentinel(PLACEHOLDER_LABEL);
        assert!(sentinel.value.is_empty());
        assert_eq!(sentinel.label, "---------");
    }
}
