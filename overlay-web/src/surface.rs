//! DOM implementation of [`OverlaySurface`].
//!
//! Works on existing markup only: containers are looked up by id and shown by
//! toggling the `hidden` attribute and the configured open class. Media goes
//! into the first `[data-overlay-media]` element (or the first `img`/`iframe`)
//! and text into `[data-overlay-title]` / `[data-overlay-description]`.

use overlay_core::{
    ContentItem, FocusCandidate, Media, OpenOptions, OverlayContent, OverlaySurface,
    ScrollSnapshot,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlIFrameElement, HtmlImageElement};

use crate::a11y::{FOCUSABLE_QUERY, focus_candidate, set_dialog_state};
use crate::dom::as_html_element;

const MEDIA_SELECTOR: &str = "[data-overlay-media]";
const TITLE_SELECTOR: &str = "[data-overlay-title]";
const DESCRIPTION_SELECTOR: &str = "[data-overlay-description]";

/// Listener closures created once per runtime and reused for every open.
pub struct SharedListeners {
    pub keydown: Closure<dyn FnMut(Event)>,
    pub click: Closure<dyn FnMut(Event)>,
}

pub struct DomSurface {
    document: Document,
    open_class: String,
    listeners: Option<SharedListeners>,
}

impl DomSurface {
    #[must_use]
    pub const fn new(document: Document, open_class: String) -> Self {
        Self {
            document,
            open_class,
            listeners: None,
        }
    }

    pub fn set_listeners(&mut self, listeners: SharedListeners) {
        self.listeners = Some(listeners);
    }

    /// Drop the shared closures; only valid once they are detached everywhere.
    pub fn take_listeners(&mut self) -> Option<SharedListeners> {
        self.listeners.take()
    }

    fn find(container: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        container
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(as_html_element)
    }

    fn set_text(container: &HtmlElement, selector: &str, text: Option<&str>) {
        if let Some(slot) = Self::find(container, selector) {
            slot.set_text_content(Some(text.unwrap_or_default()));
        }
    }

    fn set_media(container: &HtmlElement, media: &Media, alt: Option<&str>, title: Option<&str>) {
        match media {
            Media::Image { src, alt: own_alt } => {
                let image = Self::find(container, MEDIA_SELECTOR)
                    .or_else(|| Self::find(container, "img"))
                    .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
                if let Some(image) = image {
                    image.set_src(src);
                    let text = alt
                        .or(own_alt.as_deref())
                        .filter(|text| !text.is_empty())
                        .or(title)
                        .unwrap_or_default();
                    image.set_alt(text);
                }
            }
            Media::Frame { url } => {
                let frame = Self::find(container, MEDIA_SELECTOR)
                    .or_else(|| Self::find(container, "iframe"))
                    .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok());
                if let Some(frame) = frame {
                    frame.set_src(url);
                    frame.set_title(title.unwrap_or("Preview"));
                }
            }
            Media::Inline => {}
        }
    }

    fn clear_media(container: &HtmlElement) {
        if let Some(frame) = Self::find(container, "iframe")
            .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
        {
            let _ = frame.remove_attribute("src");
        }
    }
}

impl OverlaySurface for DomSurface {
    type Element = HtmlElement;

    fn resolve_container(&self, target: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(target)
            .and_then(as_html_element)
    }

    fn show(&mut self, container: &HtmlElement, content: &OverlayContent, options: &OpenOptions) {
        container.set_hidden(false);
        let _ = container.class_list().add_1(&self.open_class);
        let label = options.title.as_deref().or(options.alt.as_deref());
        set_dialog_state(container, true, label);
        Self::set_media(
            container,
            &content.media,
            options.alt.as_deref(),
            options.title.as_deref(),
        );
        if options.gallery.is_none() {
            Self::set_text(container, TITLE_SELECTOR, options.title.as_deref());
            Self::set_text(container, DESCRIPTION_SELECTOR, options.description.as_deref());
        }
    }

    fn hide(&mut self, container: &HtmlElement) {
        let _ = container.class_list().remove_1(&self.open_class);
        set_dialog_state(container, false, None);
        container.set_hidden(true);
        Self::clear_media(container);
    }

    fn render_item(&mut self, container: &HtmlElement, item: &ContentItem) {
        if let Some(label) = item.title.as_deref().or(item.alt_text()) {
            set_dialog_state(container, true, Some(label));
        }
        Self::set_media(container, &item.media, item.alt_text(), item.title.as_deref());
        Self::set_text(container, TITLE_SELECTOR, item.title.as_deref());
        Self::set_text(container, DESCRIPTION_SELECTOR, item.description.as_deref());
    }

    fn lock_scroll(&mut self) -> ScrollSnapshot {
        let offset = self
            .document
            .default_view()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or_default();
        let Some(body) = self.document.body() else {
            return ScrollSnapshot {
                overflow: String::new(),
                offset,
            };
        };
        let style = body.style();
        let overflow = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        ScrollSnapshot { overflow, offset }
    }

    fn unlock_scroll(&mut self, snapshot: &ScrollSnapshot) {
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = if snapshot.overflow.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &snapshot.overflow)
            };
        }
        if let Some(win) = self.document.default_view() {
            let current = win.scroll_y().unwrap_or(snapshot.offset);
            if (current - snapshot.offset).abs() > f64::EPSILON {
                let x = win.scroll_x().unwrap_or_default();
                win.scroll_to_with_x_and_y(x, snapshot.offset);
            }
        }
    }

    fn active_element(&self) -> Option<HtmlElement> {
        self.document.active_element().and_then(as_html_element)
    }

    fn focus(&mut self, element: &HtmlElement) -> bool {
        if element.focus().is_err() {
            return false;
        }
        self.active_element().is_some_and(|active| &active == element)
    }

    fn make_focusable(&mut self, container: &HtmlElement) {
        if !container.has_attribute("tabindex") {
            let _ = container.set_attribute("tabindex", "-1");
        }
    }

    fn is_attached(&self, element: &HtmlElement) -> bool {
        element.is_connected()
    }

    fn contains(&self, container: &HtmlElement, element: &HtmlElement) -> bool {
        container.contains(Some(element.as_ref()))
    }

    fn focus_candidates(&self, container: &HtmlElement) -> Vec<FocusCandidate<HtmlElement>> {
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(as_html_element)
            .map(focus_candidate)
            .collect()
    }

    fn query(&self, container: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        Self::find(container, selector)
    }

    fn attach_listeners(&mut self, container: &HtmlElement) {
        let Some(listeners) = self.listeners.as_ref() else {
            return;
        };
        let _ = self
            .document
            .add_event_listener_with_callback("keydown", listeners.keydown.as_ref().unchecked_ref());
        let _ = container
            .add_event_listener_with_callback("click", listeners.click.as_ref().unchecked_ref());
    }

    fn detach_listeners(&mut self, container: &HtmlElement) {
        let Some(listeners) = self.listeners.as_ref() else {
            return;
        };
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            listeners.keydown.as_ref().unchecked_ref(),
        );
        let _ = container
            .remove_event_listener_with_callback("click", listeners.click.as_ref().unchecked_ref());
    }
}
