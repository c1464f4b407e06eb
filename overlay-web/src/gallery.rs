//! Galleries read from figure markup.
//!
//! A gallery root carries `data-overlay-gallery="<lightbox id>"`; its items
//! are `[data-gallery-item]` elements or plain `figure`s, in document order.
use std::rc::Rc;

use log::debug;
use overlay_core::{ContentItem, ContentSequence, Media, OpenOptions, OverlayContent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::error::WebError;
use crate::runtime::OverlayRuntime;
use crate::triggers::bind_activation;

pub const GALLERY_SELECTOR: &str = "[data-overlay-gallery]";
pub const ITEM_SELECTOR: &str = "[data-gallery-item], figure";
const TITLE_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, [data-gallery-title]";
const DESCRIPTION_SELECTOR: &str = "p, [data-gallery-description]";

/// Items snapshotted from a gallery root at bind time.
#[derive(Debug, Clone, Default)]
pub struct DomGallery {
    figures: Vec<Element>,
    items: Vec<ContentItem>,
}

fn text_of(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Build a gallery item from a figure; figures without an image are skipped.
#[must_use]
pub fn item_from_figure(figure: &Element) -> Option<ContentItem> {
    let image = figure
        .query_selector("img")
        .ok()
        .flatten()?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    let src = image
        .get_attribute("data-full-src")
        .filter(|src| !src.is_empty())
        .unwrap_or_else(|| image.src());
    if src.is_empty() {
        return None;
    }
    let alt = Some(image.alt()).filter(|alt| !alt.is_empty());
    Some(ContentItem {
        media: Media::Image { src, alt },
        title: text_of(figure, TITLE_SELECTOR),
        description: text_of(figure, DESCRIPTION_SELECTOR),
    })
}

impl DomGallery {
    /// Snapshot the items under `root`.
    ///
    /// # Errors
    /// Returns an error if the item query fails.
    pub fn from_root(root: &Element) -> Result<Self, WebError> {
        let nodes = root.query_selector_all(ITEM_SELECTOR)?;
        let mut gallery = Self::default();
        for index in 0..nodes.length() {
            let Some(figure) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            if let Some(item) = item_from_figure(&figure) {
                gallery.figures.push(figure);
                gallery.items.push(item);
            }
        }
        Ok(gallery)
    }

    #[must_use]
    pub fn figures(&self) -> &[Element] {
        &self.figures
    }
}

impl ContentSequence for DomGallery {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<ContentItem> {
        self.items.get(index).cloned()
    }
}

/// Wire each figure under `root` to open the `lightbox` container at its index.
///
/// # Errors
/// Returns an error if the item query or a listener registration fails.
pub fn bind_gallery(
    runtime: &mut OverlayRuntime,
    root: &Element,
    lightbox: &str,
) -> Result<usize, WebError> {
    let gallery = Rc::new(DomGallery::from_root(root)?);
    let sequence: Rc<dyn ContentSequence> = gallery.clone();
    for (index, figure) in gallery.figures().iter().enumerate() {
        let sequence = Rc::clone(&sequence);
        let target = lightbox.to_string();
        bind_activation(runtime, figure, move |handle| {
            handle.open(
                OverlayContent::inline(target.clone()),
                OpenOptions::default().gallery(Rc::clone(&sequence), index),
            )
        })?;
    }
    debug!("gallery for #{lightbox} bound with {} items", gallery.len());
    Ok(gallery.len())
}

/// Wire every `[data-overlay-gallery]` root in `document`.
///
/// # Errors
/// Returns an error if a selector query or a listener registration fails.
pub fn bind_galleries(runtime: &mut OverlayRuntime, document: &Document) -> Result<usize, WebError> {
    let roots = document.query_selector_all(GALLERY_SELECTOR)?;
    let mut bound = 0;
    for index in 0..roots.length() {
        let Some(root) = roots.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(lightbox) = root
            .get_attribute("data-overlay-gallery")
            .filter(|id| !id.trim().is_empty())
        else {
            continue;
        };
        bound += bind_gallery(runtime, &root, lightbox.trim())?;
    }
    Ok(bound)
}
