//! Focusability rules for overlay descendants.

/// Broad element category relevant to keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Anchor,
    Button,
    Input,
    Select,
    TextArea,
    /// Anything else; focusable only through an explicit tab index.
    Other,
}

impl ElementKind {
    /// Map an upper- or lower-case tag name to its kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "a" | "area" => Self::Anchor,
            "button" => Self::Button,
            "input" => Self::Input,
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            _ => Self::Other,
        }
    }

    /// Form controls honour the `disabled` attribute.
    #[must_use]
    pub const fn is_form_control(self) -> bool {
        matches!(
            self,
            Self::Button | Self::Input | Self::Select | Self::TextArea
        )
    }
}

/// Parsed `tabindex` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabIndex {
    /// Attribute absent; the element's default focusability applies.
    #[default]
    Unset,
    /// Negative or unparsable value: reachable programmatically only.
    Removed,
    /// Zero or positive value: part of sequential navigation.
    Sequential(i32),
}

impl TabIndex {
    /// Sequential navigation rank: positive indices first in ascending
    /// order, then everything else in document order.
    #[must_use]
    pub const fn navigation_rank(self) -> (u8, i32) {
        match self {
            Self::Sequential(n) if n > 0 => (0, n),
            _ => (1, 0),
        }
    }

    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::Unset;
        };
        match raw.trim().parse::<i32>() {
            Ok(n) if n >= 0 => Self::Sequential(n),
            _ => Self::Removed,
        }
    }
}

/// A descendant reported by a surface, with the attributes that decide
/// whether it takes part in the focus trap.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusCandidate<E> {
    pub element: E,
    pub kind: ElementKind,
    pub has_href: bool,
    pub disabled: bool,
    /// Hidden inputs and elements excluded from rendering.
    pub hidden: bool,
    pub tab_index: TabIndex,
}

impl<E> FocusCandidate<E> {
    /// Candidate with no attributes set.
    pub fn new(element: E, kind: ElementKind) -> Self {
        Self {
            element,
            kind,
            has_href: false,
            disabled: false,
            hidden: false,
            tab_index: TabIndex::Unset,
        }
    }

    #[must_use]
    pub fn with_href(mut self) -> Self {
        self.has_href = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_tab_index(mut self, tab_index: TabIndex) -> Self {
        self.tab_index = tab_index;
        self
    }

    /// Whether keyboard Tab navigation can land on this element.
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        if self.hidden || (self.disabled && self.kind.is_form_control()) {
            return false;
        }
        match self.tab_index {
            TabIndex::Removed => false,
            TabIndex::Sequential(_) => true,
            TabIndex::Unset => match self.kind {
                ElementKind::Anchor => self.has_href,
                ElementKind::Button
                | ElementKind::Input
                | ElementKind::Select
                | ElementKind::TextArea => true,
                ElementKind::Other => false,
            },
        }
    }
}

/// Keep the focusable candidates in the order sequential navigation visits
/// them. `candidates` must be in document order.
pub fn focusable_elements<E>(candidates: Vec<FocusCandidate<E>>) -> Vec<E> {
    let mut focusable: Vec<_> = candidates
        .into_iter()
        .filter(FocusCandidate::is_focusable)
        .collect();
    focusable.sort_by_key(|candidate| candidate.tab_index.navigation_rank());
    focusable
        .into_iter()
        .map(|candidate| candidate.element)
        .collect()
}
