//! Page Request Wrappers
//!
//! Requests to the current page's own address, organized by purpose.

mod lookup;
mod submit;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::RequestError;

// Re-export all public items
pub use lookup::*;
pub use submit::*;

/// Characters left as-is in query strings and form bodies
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode one query/form component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE).to_string()
}

/// `name=value&name=value`, each side encoded
pub fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Address of the current page
pub fn current_page_href() -> Result<String, RequestError> {
    web_sys::window()
        .ok_or_else(|| RequestError::Network("no window".to_string()))?
        .location()
        .href()
        .map_err(|e| RequestError::Network(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("abc-1_2.3~"), "abc-1_2.3~");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("Иван"), "%D0%98%D0%B2%D0%B0%D0%BD");
        assert_eq!(encode_component(""), "");
    }

    #[test]
    fn test_encode_pairs_keeps_empty_values() {
        assert_eq!(encode_pairs([("reg", "on"), ("email", "")]), "reg=on&email=");
    }
}
