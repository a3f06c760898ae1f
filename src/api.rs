//! Items Endpoint
//!
//! Browser `fetch` wrapper for the remote item list.

use rental_catalog::{Item, ItemsResponse, LoadError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Readable text for a rejected promise or thrown JS value
fn js_error(err: JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

/// GET the item list from `url`.
///
/// The HTTP status is not inspected; whatever body comes back must decode
/// into the `{ success, data | message }` envelope.
pub async fn fetch_items(url: &str) -> Result<Vec<Item>, LoadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| LoadError::Transport(js_error(e)))?;
    let window = web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Transport(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| LoadError::Transport(js_error(e)))?;

    let body = response.json().map_err(|e| LoadError::Malformed(js_error(e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Malformed(js_error(e)))?;

    let envelope: ItemsResponse = serde_wasm_bindgen::from_value(body).map_err(|e| LoadError::Malformed(e.to_string()))?;
    envelope.into_result()
}
