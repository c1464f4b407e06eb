//! Overlay Core
//!
//! Platform-agnostic controller for a single modal/lightbox overlay: focus
//! trap, scroll lock, dismissal and focus restoration. Rendering is delegated
//! to an [`OverlaySurface`]; this crate carries no UI or platform dependencies.

#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod controller;
pub mod element;
pub mod error;
pub mod event;
pub mod gallery;
pub mod preview;
pub mod surface;
pub mod trap;

pub use config::OverlayConfig;
pub use content::{ContentItem, GallerySpec, InitialFocus, Media, OpenOptions, OverlayContent};
pub use controller::OverlayController;
pub use element::{ElementKind, FocusCandidate, TabIndex, focusable_elements};
pub use error::{ConfigError, OverlayError};
pub use event::{EventResponse, Key, KeyInput, OverlayEvent, PointerTarget};
pub use gallery::{ContentSequence, GalleryCursor, VecSequence};
pub use preview::{PreviewDecision, ProbeOutcome};
pub use surface::{OverlaySurface, ScrollSnapshot};
pub use trap::{TrapStep, tab_step};
