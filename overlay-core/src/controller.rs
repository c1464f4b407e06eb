//! Single-overlay state machine.
//!
//! The controller is either closed or holds exactly one [`ActiveOverlay`].
//! Every transition is synchronous: animation, if any, belongs to the surface
//! and never delays the state change.

use log::debug;

use crate::config::OverlayConfig;
use crate::content::{InitialFocus, OpenOptions, OverlayContent};
use crate::element::focusable_elements;
use crate::error::OverlayError;
use crate::event::{EventResponse, Key, KeyInput, OverlayEvent, PointerTarget};
use crate::gallery::GalleryCursor;
use crate::surface::{OverlaySurface, ScrollSnapshot};
use crate::trap::{TrapStep, tab_step};

/// Bookkeeping for the overlay currently on screen.
#[derive(Debug)]
struct ActiveOverlay<E> {
    container: E,
    content: OverlayContent,
    focusables: Vec<E>,
    return_focus: Option<E>,
    scroll: Option<ScrollSnapshot>,
    gallery: Option<GalleryCursor>,
}

/// Owns the page's focus and scroll-lock state while an overlay is open.
pub struct OverlayController<S: OverlaySurface> {
    surface: S,
    config: OverlayConfig,
    active: Option<ActiveOverlay<S::Element>>,
}

impl<S: OverlaySurface> OverlayController<S> {
    pub const fn new(surface: S, config: OverlayConfig) -> Self {
        Self {
            surface,
            config,
            active: None,
        }
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Target id of the open overlay.
    #[must_use]
    pub fn current_target(&self) -> Option<&str> {
        self.active
            .as_ref()
            .map(|active| active.content.target.as_str())
    }

    /// Gallery index on display, `None` when closed or not a gallery.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active
            .as_ref()
            .and_then(|active| active.gallery.as_ref())
            .map(GalleryCursor::index)
    }

    /// Focusable descendants captured when the overlay opened.
    #[must_use]
    pub fn focusables(&self) -> &[S::Element] {
        self.active
            .as_ref()
            .map(|active| active.focusables.as_slice())
            .unwrap_or(&[])
    }

    /// Present `content`, closing whatever overlay is already open.
    ///
    /// The trigger is validated before any state changes, so a rejected open
    /// leaves a previously opened overlay untouched.
    ///
    /// # Errors
    ///
    /// [`OverlayError::MissingTarget`] when the container does not exist and
    /// [`OverlayError::EmptySequence`] for a gallery with no items.
    pub fn open(
        &mut self,
        content: OverlayContent,
        options: OpenOptions,
    ) -> Result<(), OverlayError> {
        let container = self
            .surface
            .resolve_container(&content.target)
            .ok_or_else(|| OverlayError::MissingTarget {
                target: content.target.clone(),
            })?;
        let gallery = match options.gallery.clone() {
            Some(spec) => Some(
                GalleryCursor::new(spec.sequence, spec.start).ok_or(OverlayError::EmptySequence)?,
            ),
            None => None,
        };

        // A replaced overlay hands its restore target to the new one.
        let return_focus = match self.active.take() {
            Some(previous) => {
                debug!(
                    "overlay `{}` replaced by `{}`",
                    previous.content.target, content.target
                );
                self.teardown(previous)
            }
            None => self.surface.active_element(),
        };

        self.surface.show(&container, &content, &options);
        if let Some(item) = gallery.as_ref().and_then(GalleryCursor::current) {
            self.surface.render_item(&container, &item);
        }
        let scroll = self.config.lock_scroll.then(|| self.surface.lock_scroll());
        let focusables = focusable_elements(self.surface.focus_candidates(&container));
        self.surface.attach_listeners(&container);
        self.focus_initial(&container, &focusables, &options.initial_focus);

        debug!(
            "overlay `{}` opened with {} focusable element(s)",
            content.target,
            focusables.len()
        );
        self.active = Some(ActiveOverlay {
            container,
            content,
            focusables,
            return_focus,
            scroll,
            gallery,
        });
        Ok(())
    }

    /// Dismiss the open overlay and restore focus. Returns false when nothing
    /// was open.
    pub fn close(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        let target = active.content.target.clone();
        if let Some(element) = self.teardown(active) {
            if self.surface.is_attached(&element) {
                self.surface.focus(&element);
            } else {
                debug!("overlay `{target}`: return focus target left the document");
            }
        }
        debug!("overlay `{target}` closed");
        true
    }

    /// Show the following gallery item, wrapping to the first.
    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Show the preceding gallery item, wrapping to the last.
    pub fn previous(&mut self) -> Option<usize> {
        self.step(-1)
    }

    /// Route an input event through the state machine.
    pub fn handle_event(&mut self, event: OverlayEvent) -> EventResponse {
        if self.active.is_none() {
            return EventResponse::ignored();
        }
        match event {
            OverlayEvent::Key(input) => self.handle_key(input),
            OverlayEvent::Pointer {
                target: PointerTarget::Panel,
                ..
            } => EventResponse::ignored(),
            OverlayEvent::Pointer {
                target: PointerTarget::Backdrop,
                synthetic,
            } => {
                if !self.config.dismiss_on_backdrop
                    || (synthetic && self.config.ignore_synthetic_backdrop_clicks)
                {
                    return EventResponse::ignored();
                }
                self.close();
                EventResponse::handled()
            }
            OverlayEvent::CloseControl => {
                self.close();
                EventResponse::consumed()
            }
            OverlayEvent::NextItem => self
                .next()
                .map_or_else(EventResponse::ignored, |_| EventResponse::consumed()),
            OverlayEvent::PreviousItem => self
                .previous()
                .map_or_else(EventResponse::ignored, |_| EventResponse::consumed()),
            OverlayEvent::NavigateAway => {
                self.close();
                EventResponse::handled()
            }
        }
    }

    fn handle_key(&mut self, input: KeyInput) -> EventResponse {
        match input.key {
            Key::Escape if self.config.dismiss_on_escape => {
                self.close();
                EventResponse::consumed()
            }
            Key::Tab => self.trap_tab(input.shift),
            Key::ArrowRight if self.config.arrow_navigation => {
                self.next().map_or_else(EventResponse::ignored, |_| EventResponse::consumed())
            }
            Key::ArrowLeft if self.config.arrow_navigation => self
                .previous()
                .map_or_else(EventResponse::ignored, |_| EventResponse::consumed()),
            _ => EventResponse::ignored(),
        }
    }

    fn trap_tab(&mut self, backwards: bool) -> EventResponse {
        let Some(active) = self.active.as_ref() else {
            return EventResponse::ignored();
        };
        let focused = self.surface.active_element();
        let inside = focused
            .as_ref()
            .is_some_and(|element| self.surface.contains(&active.container, element));
        match tab_step(&active.focusables, focused.as_ref(), inside, backwards) {
            TrapStep::PassThrough => EventResponse::handled(),
            TrapStep::MoveTo(element) => {
                self.surface.focus(element);
                EventResponse::consumed()
            }
            TrapStep::Contain => {
                self.surface.make_focusable(&active.container);
                self.surface.focus(&active.container);
                EventResponse::consumed()
            }
        }
    }

    fn step(&mut self, delta: isize) -> Option<usize> {
        let active = self.active.as_mut()?;
        let cursor = active.gallery.as_mut()?;
        let index = cursor.step(delta);
        if let Some(item) = cursor.current() {
            self.surface.render_item(&active.container, &item);
        }
        Some(index)
    }

    fn focus_initial(
        &mut self,
        container: &S::Element,
        focusables: &[S::Element],
        initial: &InitialFocus,
    ) {
        let first = focusables.first();
        let preferred = match initial {
            InitialFocus::FirstFocusable => first.cloned(),
            InitialFocus::Container => None,
            InitialFocus::Matching(selector) => self.surface.query(container, selector),
        };
        if let Some(element) = preferred
            && self.surface.focus(&element)
        {
            return;
        }
        // A matched descendant that refused focus falls back to the first
        // focusable one before the container.
        if matches!(initial, InitialFocus::Matching(_))
            && let Some(element) = first
            && self.surface.focus(element)
        {
            return;
        }
        self.surface.make_focusable(container);
        self.surface.focus(container);
    }

    /// Undo everything `open` did except focus restoration, which is handed
    /// back to the caller.
    fn teardown(&mut self, active: ActiveOverlay<S::Element>) -> Option<S::Element> {
        self.surface.detach_listeners(&active.container);
        self.surface.hide(&active.container);
        if let Some(snapshot) = &active.scroll {
            self.surface.unlock_scroll(snapshot);
        }
        active.return_focus
    }
}

impl<S: OverlaySurface> Drop for OverlayController<S> {
    fn drop(&mut self) {
        if self.is_open() {
            self.close();
        }
    }
}
