//! Order Submission
//!
//! POSTs the serialized form to the page address and reports where the
//! server's redirect chain ended.

use gloo_net::http::Request;

use crate::error::RequestError;

/// Submit a urlencoded body; returns the final (post-redirect) address
pub async fn submit_order(url: &str, body: String) -> Result<String, RequestError> {
    let response = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| RequestError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RequestError::Status(response.status()));
    }
    Ok(response.url())
}

/// Navigate the page
pub fn navigate_to(url: &str) -> Result<(), RequestError> {
    web_sys::window()
        .ok_or_else(|| RequestError::Network("no window".to_string()))?
        .location()
        .set_href(url)
        .map_err(|e| RequestError::Network(format!("{:?}", e)))
}

/// Submit to the current page and follow the server's redirect
pub async fn send_order(body: String) -> Result<(), RequestError> {
    let href = super::current_page_href()?;
    let final_url = submit_order(&href, body).await?;
    navigate_to(&final_url)
}
