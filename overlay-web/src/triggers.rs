//! Declarative trigger wiring.
//!
//! Any element carrying `data-overlay-target="<container id>"` opens that
//! container when activated. Optional attributes pick the media:
//! `data-overlay-image` (with `data-overlay-alt`) or `data-overlay-frame`.
//! `data-overlay-label` titles the dialog and `data-overlay-focus` names the
//! selector that receives initial focus.

use log::debug;
use overlay_core::{ElementKind, InitialFocus, Key, Media, OpenOptions, OverlayContent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::error::WebError;
use crate::listener::EventListener;
use crate::runtime::{OverlayHandle, OverlayRuntime};

pub const TRIGGER_SELECTOR: &str = "[data-overlay-target]";

fn attribute(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read the open request a trigger element describes.
#[must_use]
pub fn trigger_request(element: &Element) -> Option<(OverlayContent, OpenOptions)> {
    let target = attribute(element, "data-overlay-target")?;
    let alt = attribute(element, "data-overlay-alt");
    let media = if let Some(src) = attribute(element, "data-overlay-image") {
        Media::Image {
            src,
            alt: alt.clone(),
        }
    } else if let Some(url) = attribute(element, "data-overlay-frame") {
        Media::Frame { url }
    } else {
        Media::Inline
    };

    let options = OpenOptions {
        title: attribute(element, "data-overlay-label"),
        alt,
        description: attribute(element, "data-overlay-description"),
        initial_focus: attribute(element, "data-overlay-focus")
            .map_or(InitialFocus::FirstFocusable, InitialFocus::Matching),
        gallery: None,
    };
    Some((OverlayContent { target, media }, options))
}

fn natively_activatable(element: &Element) -> bool {
    let kind = ElementKind::from_tag(&element.tag_name());
    kind == ElementKind::Button || (kind == ElementKind::Anchor && element.has_attribute("href"))
}

/// Bind click (and, for non-native controls, Enter/Space) to `activate`.
///
/// `activate` returns whether it took the activation; the default browser
/// action only runs when it did not.
///
/// # Errors
/// Returns an error if the browser rejects a listener registration.
pub fn bind_activation<F>(
    runtime: &mut OverlayRuntime,
    element: &Element,
    activate: F,
) -> Result<(), WebError>
where
    F: Fn(&OverlayHandle) -> bool + Clone + 'static,
{
    let handle = runtime.handle();

    let on_click = {
        let handle = handle.clone();
        let activate = activate.clone();
        EventListener::new(element.as_ref(), "click", move |event| {
            if activate(&handle) {
                event.prevent_default();
            }
        })?
    };
    runtime.bind(on_click);

    if natively_activatable(element) {
        return Ok(());
    }
    if !element.has_attribute("tabindex") {
        element.set_attribute("tabindex", "0")?;
    }
    let on_key = EventListener::new(element.as_ref(), "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if Key::from_dom_key(&key.key()).activates() {
            event.prevent_default();
            activate(&handle);
        }
    })?;
    runtime.bind(on_key);
    Ok(())
}

/// Wire every `[data-overlay-target]` element in `document`.
///
/// # Errors
/// Returns an error if the selector query or a listener registration fails.
pub fn bind_triggers(runtime: &mut OverlayRuntime, document: &Document) -> Result<usize, WebError> {
    let nodes = document.query_selector_all(TRIGGER_SELECTOR)?;
    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some((content, options)) = trigger_request(&element) else {
            debug!("trigger without a target id skipped");
            continue;
        };
        bind_activation(runtime, &element, move |handle| {
            handle.open(content.clone(), options.clone())
        })?;
        bound += 1;
    }
    debug!("bound {bound} overlay triggers");
    Ok(bound)
}
