//! Input events routed to the controller by a dispatch layer.

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    /// Keys that activate a focused trigger.
    #[must_use]
    pub const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
}

impl KeyInput {
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    #[must_use]
    pub const fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// Where a pointer interaction landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The backdrop, outside the content panel.
    Backdrop,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Key(KeyInput),
    Pointer {
        target: PointerTarget,
        /// Click synthesised from a keyboard activation (`detail == 0`).
        synthetic: bool,
    },
    CloseControl,
    /// Gallery "next" control.
    NextItem,
    PreviousItem,
    NavigateAway,
}

impl OverlayEvent {
    #[must_use]
    pub const fn key(key: Key) -> Self {
        Self::Key(KeyInput::new(key))
    }

    #[must_use]
    pub const fn backdrop_click() -> Self {
        Self::Pointer {
            target: PointerTarget::Backdrop,
            synthetic: false,
        }
    }
}

/// What the dispatch layer should do with the originating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The controller consumed the event.
    pub handled: bool,
    /// Suppress the default browser action.
    pub prevent_default: bool,
}

impl EventResponse {
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            handled: false,
            prevent_default: false,
        }
    }

    #[must_use]
    pub const fn handled() -> Self {
        Self {
            handled: true,
            prevent_default: false,
        }
    }

    #[must_use]
    pub const fn consumed() -> Self {
        Self {
            handled: true,
            prevent_default: true,
        }
    }
}
