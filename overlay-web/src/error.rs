use wasm_bindgen::JsValue;

use crate::dom::js_error_message;

/// Failures while wiring the overlay runtime into a page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}
