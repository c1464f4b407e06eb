// Accessibility helpers for overlay containers and their descendants

use overlay_core::{ElementKind, FocusCandidate, TabIndex};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Selector for every element that may take part in the focus trap.
///
/// The query is deliberately broad; [`focus_candidate`] applies the exact
/// rules (disabled controls, negative tab index, hidden inputs).
pub const FOCUSABLE_QUERY: &str =
    "a[href], area[href], button, input, select, textarea, [tabindex]";

/// Describe an element for the focusability predicate.
#[must_use]
pub fn focus_candidate(element: HtmlElement) -> FocusCandidate<HtmlElement> {
    let kind = ElementKind::from_tag(&element.tag_name());
    let tab_index = TabIndex::parse(element.get_attribute("tabindex").as_deref());
    let has_href = element.has_attribute("href");
    let disabled = element.has_attribute("disabled");
    let hidden = is_hidden(&element);

    let mut candidate = FocusCandidate::new(element, kind).with_tab_index(tab_index);
    if has_href {
        candidate = candidate.with_href();
    }
    if disabled {
        candidate = candidate.disabled();
    }
    if hidden {
        candidate = candidate.hidden();
    }
    candidate
}

fn is_hidden(element: &HtmlElement) -> bool {
    if element.hidden() || element.closest("[hidden], [inert]").ok().flatten().is_some() {
        return true;
    }
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .is_some_and(|input| input.type_().eq_ignore_ascii_case("hidden"))
}

/// Mark a container as an open (or closed) modal dialog for assistive technology.
pub fn set_dialog_state(container: &Element, open: bool, label: Option<&str>) {
    let _ = container.set_attribute("aria-hidden", if open { "false" } else { "true" });
    if !open {
        return;
    }
    if !container.has_attribute("role") {
        let _ = container.set_attribute("role", "dialog");
    }
    let _ = container.set_attribute("aria-modal", "true");
    if let Some(label) = label.filter(|label| !label.is_empty()) {
        let _ = container.set_attribute("aria-label", label);
    }
}
