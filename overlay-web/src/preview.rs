//! Document previews: probe the URL, then open it in the preview overlay or
//! hand it to the browser.
use log::{debug, warn};
use overlay_core::{OpenOptions, OverlayContent, PreviewDecision};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::WebError;
use crate::runtime::{OverlayHandle, OverlayRuntime};
use crate::triggers::bind_activation;

pub const PREVIEW_SELECTOR: &str = "[data-preview-src]";
pub const DEFAULT_PREVIEW_TARGET: &str = "preview-modal";
const FALLBACK_TITLE: &str = "Document";

/// A preview trigger resolved from markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub url: String,
    pub target: String,
    pub title: String,
}

impl PreviewRequest {
    /// Read `data-preview-src`, `data-preview-target` and a title from
    /// `data-overlay-label` or the nearest list item heading.
    #[must_use]
    pub fn from_element(element: &Element) -> Option<Self> {
        let url = element
            .get_attribute("data-preview-src")
            .map(|src| src.trim().to_string())
            .filter(|src| !src.is_empty())?;
        let target = element
            .get_attribute("data-preview-target")
            .filter(|target| !target.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREVIEW_TARGET.to_string());
        let title = element
            .get_attribute("data-overlay-label")
            .or_else(|| {
                element
                    .closest("li, article")
                    .ok()
                    .flatten()
                    .and_then(|item| item.query_selector("h2, h3, h4").ok().flatten())
                    .and_then(|heading| heading.text_content())
            })
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        Some(Self { url, target, title })
    }
}

/// Probe `request.url` and act on the outcome.
///
/// Falls back to external navigation when the preview container is missing.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn open_preview(handle: OverlayHandle, request: PreviewRequest) -> PreviewDecision {
    let outcome = dom::probe(&request.url, handle.probe_timeout_ms()).await;
    let decision = PreviewDecision::from_probe(outcome);
    debug!("preview {} probed as {outcome:?}", request.url);
    match decision {
        PreviewDecision::Open => {
            let opened = handle.open(
                OverlayContent::frame(request.target.as_str(), request.url.as_str()),
                OpenOptions::default().titled(request.title.as_str()),
            );
            if !opened {
                warn!("preview container #{} unavailable; opening externally", request.target);
                dom::open_external(&request.url);
            }
        }
        PreviewDecision::NavigateExternal => dom::open_external(&request.url),
    }
    decision
}

/// Wire every `[data-preview-src]` element in `document`.
///
/// # Errors
/// Returns an error if the selector query or a listener registration fails.
pub fn bind_previews(runtime: &mut OverlayRuntime, document: &Document) -> Result<usize, WebError> {
    let nodes = document.query_selector_all(PREVIEW_SELECTOR)?;
    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(request) = PreviewRequest::from_element(&element) else {
            debug!("preview trigger without a source skipped");
            continue;
        };
        bind_activation(runtime, &element, move |handle| {
            spawn_local({
                let handle = handle.clone();
                let request = request.clone();
                async move {
                    open_preview(handle, request).await;
                }
            });
            true
        })?;
        bound += 1;
    }
    Ok(bound)
}
