//! Error Types

use thiserror::Error;

/// Failures of the persistent key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Js(String),
}

/// Failures while loading a catalog section
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog document has no `{0}` array")]
    MissingField(String),
}

/// Readable text from a thrown JavaScript value
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
