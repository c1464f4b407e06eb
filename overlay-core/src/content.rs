//! What an overlay shows and how it is opened.
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::gallery::ContentSequence;

/// Media rendered inside an overlay container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    /// Embedded document (PDF preview and similar).
    Frame { url: String },
    /// The container's existing markup (forms, static dialogs).
    Inline,
}

/// Content reference supplied by a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayContent {
    /// Identifier of the container element the overlay presents.
    pub target: String,
    #[serde(default = "OverlayContent::default_media")]
    pub media: Media,
}

impl OverlayContent {
    const fn default_media() -> Media {
        Media::Inline
    }

    /// Show a container's own markup.
    pub fn inline(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            media: Media::Inline,
        }
    }

    pub fn image(target: impl Into<String>, src: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            target: target.into(),
            media: Media::Image {
                src: src.into(),
                alt,
            },
        }
    }

    pub fn frame(target: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            media: Media::Frame { url: url.into() },
        }
    }
}

/// One entry of a gallery sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub media: Media,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ContentItem {
    #[must_use]
    pub const fn new(media: Media) -> Self {
        Self {
            media,
            title: None,
            description: None,
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Alt text for image media, falling back to the title.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        match &self.media {
            Media::Image { alt: Some(alt), .. } if !alt.is_empty() => Some(alt),
            _ => self.title.as_deref(),
        }
    }
}

/// Where focus goes once the overlay is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialFocus {
    /// First focusable descendant, or the container when there is none.
    #[default]
    FirstFocusable,
    Container,
    /// Descendant matching a surface-specific selector.
    Matching(String),
}

/// Per-open presentation options.
#[derive(Clone, Default)]
pub struct OpenOptions {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub description: Option<String>,
    pub initial_focus: InitialFocus,
    pub gallery: Option<GallerySpec>,
}

/// Gallery sequence plus the index to start on.
#[derive(Clone)]
pub struct GallerySpec {
    pub sequence: Rc<dyn ContentSequence>,
    pub start: usize,
}

impl fmt::Debug for GallerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GallerySpec")
            .field("len", &self.sequence.len())
            .field("start", &self.start)
            .finish()
    }
}

impl fmt::Debug for OpenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenOptions")
            .field("title", &self.title)
            .field("alt", &self.alt)
            .field("description", &self.description)
            .field("initial_focus", &self.initial_focus)
            .field("gallery", &self.gallery)
            .finish()
    }
}

impl OpenOptions {
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn focus(mut self, initial_focus: InitialFocus) -> Self {
        self.initial_focus = initial_focus;
        self
    }

    /// Present `sequence` starting at `start`.
    #[must_use]
    pub fn gallery(mut self, sequence: Rc<dyn ContentSequence>, start: usize) -> Self {
        self.gallery = Some(GallerySpec { sequence, start });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_falls_back_to_title() {
        let with_alt = ContentItem::new(Media::Image {
            src: "a.jpg".into(),
            alt: Some("river".into()),
        })
        .titled("Title");
        assert_eq!(with_alt.alt_text(), Some("river"));

        let empty_alt = ContentItem::new(Media::Image {
            src: "a.jpg".into(),
            alt: Some(String::new()),
        })
        .titled("Title");
        assert_eq!(empty_alt.alt_text(), Some("Title"));

        assert_eq!(ContentItem::new(Media::Inline).alt_text(), None);
    }

    #[test]
    fn content_deserializes_with_inline_default() {
        let content: OverlayContent =
            serde_json::from_str(r#"{"target":"modal"}"#).expect("valid content json");
        assert_eq!(content, OverlayContent::inline("modal"));

        let frame: OverlayContent = serde_json::from_str(
            r#"{"target":"preview","media":{"kind":"frame","url":"docs/a.pdf"}}"#,
        )
        .expect("valid frame json");
        assert_eq!(frame, OverlayContent::frame("preview", "docs/a.pdf"));
    }
}
