use log::warn;
use overlay_core::OverlayConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "overlay-config";

/// Read the page's overlay configuration, falling back to defaults.
#[must_use]
pub fn load_page_config(document: &Document) -> OverlayConfig {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
    else {
        return OverlayConfig::default();
    };
    OverlayConfig::from_json(&source).unwrap_or_else(|err| {
        warn!("invalid #{CONFIG_ELEMENT_ID}, using defaults: {err}");
        OverlayConfig::default()
    })
}
