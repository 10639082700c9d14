//! Catalog Fetch
//!
//! Loads a catalog section's JSON document over `fetch`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::catalog::parse_collection;
use crate::error::{js_error_text, CatalogError};
use crate::models::ItemRecord;

/// Fetch `url` and return the records under `field`
pub async fn fetch_collection(url: &str, field: &str) -> Result<Vec<ItemRecord>, CatalogError> {
    let window = web_sys::window().ok_or_else(|| CatalogError::Fetch("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;

    if !response.ok() {
        return Err(CatalogError::Status { url: url.to_string(), status: response.status() });
    }

    let text = response.text().map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?
        .as_string()
        .ok_or_else(|| CatalogError::Fetch(format!("{} returned a non-text body", url)))?;

    parse_collection(&text, field)
}
