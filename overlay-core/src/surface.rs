//! Rendering boundary driven by the controller.
//!
//! A surface owns nothing about overlay state; it only performs the effects
//! the controller asks for. Browser builds implement it over the DOM, tests
//! implement it in memory.

use crate::content::{ContentItem, OpenOptions, OverlayContent};
use crate::element::FocusCandidate;

/// Scroll-lock boundary state captured when the lock engages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    /// Inline `overflow` value on the boundary before locking.
    pub overflow: String,
    /// Vertical scroll offset before locking.
    pub offset: f64,
}

/// Effects the controller needs from a rendering surface.
pub trait OverlaySurface {
    /// Handle to a live element.
    type Element: Clone + PartialEq + std::fmt::Debug;

    /// Look up the container a trigger refers to.
    fn resolve_container(&self, target: &str) -> Option<Self::Element>;

    /// Bring the container to the top of the visual stack and set its media.
    fn show(&mut self, container: &Self::Element, content: &OverlayContent, options: &OpenOptions);

    fn hide(&mut self, container: &Self::Element);

    /// Replace the displayed media, title and description.
    fn render_item(&mut self, container: &Self::Element, item: &ContentItem);

    /// Suspend background scrolling and report what was there before.
    fn lock_scroll(&mut self) -> ScrollSnapshot;

    fn unlock_scroll(&mut self, snapshot: &ScrollSnapshot);

    /// Element currently holding focus, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// Returns false when the element could not take focus.
    fn focus(&mut self, element: &Self::Element) -> bool;

    /// Make the container itself programmatically focusable.
    fn make_focusable(&mut self, container: &Self::Element);

    /// Whether the element is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Whether `element` is the container or one of its descendants.
    fn contains(&self, container: &Self::Element, element: &Self::Element) -> bool;

    /// Descendants of the container in document order.
    fn focus_candidates(&self, container: &Self::Element) -> Vec<FocusCandidate<Self::Element>>;

    /// Descendant matching a surface-specific selector.
    fn query(&self, container: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Register keyboard and pointer listeners for the open container.
    fn attach_listeners(&mut self, container: &Self::Element);

    fn detach_listeners(&mut self, container: &Self::Element);
}
