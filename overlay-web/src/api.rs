//! Functions exported to page scripts.
//!
//! They operate on the runtime installed by `start()` and are no-ops
//! (returning `false`/`null`) before it is installed.
use overlay_core::{InitialFocus, Media, OpenOptions, OverlayContent};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::with_installed;

/// Request accepted by `openOverlay`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequest {
    pub target: String,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

impl OpenRequest {
    #[must_use]
    pub fn into_parts(self) -> (OverlayContent, OpenOptions) {
        let content = OverlayContent {
            target: self.target,
            media: self.media.unwrap_or(Media::Inline),
        };
        let options = OpenOptions {
            title: self.title,
            alt: self.alt,
            description: self.description,
            initial_focus: self
                .focus
                .map_or(InitialFocus::FirstFocusable, InitialFocus::Matching),
            gallery: None,
        };
        (content, options)
    }
}

/// Open the overlay described by `request`; `false` when it was rejected.
///
/// # Errors
/// Returns an error if `request` does not have the `OpenRequest` shape.
#[wasm_bindgen(js_name = openOverlay)]
pub fn open_overlay(request: JsValue) -> Result<bool, JsValue> {
    let request: OpenRequest = serde_wasm_bindgen::from_value(request)?;
    let (content, options) = request.into_parts();
    Ok(with_installed(|handle| handle.open(content, options)).unwrap_or(false))
}

#[wasm_bindgen(js_name = closeOverlay)]
pub fn close_overlay() -> bool {
    with_installed(|handle| handle.close()).unwrap_or(false)
}

#[wasm_bindgen(js_name = nextOverlayItem)]
pub fn next_overlay_item() -> Option<usize> {
    with_installed(|handle| handle.next()).flatten()
}

#[wasm_bindgen(js_name = previousOverlayItem)]
pub fn previous_overlay_item() -> Option<usize> {
    with_installed(|handle| handle.previous()).flatten()
}

/// `{ open, target, index }` for the current overlay.
#[wasm_bindgen(js_name = overlayState)]
pub fn overlay_state() -> JsValue {
    let state = with_installed(|handle| handle.state()).unwrap_or_default();
    serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
}

/// Close any open overlay and unbind every listener.
#[wasm_bindgen(js_name = teardownOverlays)]
pub fn teardown_overlays() {
    crate::uninstall();
}
