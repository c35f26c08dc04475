//! Dependent Option Lookup
//!
//! `GET <page>?category=<value>` answered with a JSON object of key → label.

use gloo_net::http::Request;

use crate::error::RequestError;
use crate::models::LookupResult;
use super::encode_component;

/// Build the lookup address from the page address.
/// The fragment is dropped; an existing query is extended with `&`.
/// An empty value is still sent (`category=`).
pub fn lookup_url(page_href: &str, param: &str, value: &str) -> String {
    let base = page_href.split('#').next().unwrap_or(page_href);
    let separator = match base.find('?') {
        None => "?",
        Some(pos) if pos + 1 == base.len() || base.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{}{}{}={}", base, separator, encode_component(param), encode_component(value))
}

/// Decode a lookup answer
pub fn parse_lookup_response(status: u16, body: &str) -> Result<LookupResult, RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Fetch the replacement options for one dependent select
pub async fn fetch_options(url: &str) -> Result<LookupResult, RequestError> {
    // The page view only answers with JSON for AJAX-flagged requests
    let response = Request::get(url)
        .header("X-Requested-With", "XMLHttpRequest")
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| RequestError::Network(e.to_string()))?;
    parse_lookup_response(status, &body)
}
