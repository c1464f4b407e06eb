//! Owns the page's overlay controller and routes DOM events into it.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use overlay_core::{
    EventResponse, Key, KeyInput, OpenOptions, OverlayConfig, OverlayContent, OverlayController,
    OverlayEvent, PointerTarget,
};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

use crate::dom;
use crate::error::WebError;
use crate::listener::EventListener;
use crate::surface::{DomSurface, SharedListeners};

type Controller = OverlayController<DomSurface>;

const CLOSE_SELECTOR: &str = "[data-overlay-close]";
const NEXT_SELECTOR: &str = "[data-overlay-next]";
const PREVIOUS_SELECTOR: &str = "[data-overlay-prev]";
const BACKDROP_SELECTOR: &str = "[data-overlay-backdrop]";

/// What the page-level API reports about the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    pub open: bool,
    pub target: Option<String>,
    pub index: Option<usize>,
}

/// Weak, cloneable access to the installed controller.
///
/// Every call uses `try_borrow_mut`, so an event arriving while the
/// controller is mid-transition is dropped instead of panicking.
#[derive(Clone)]
pub struct OverlayHandle {
    controller: Weak<RefCell<Controller>>,
}

impl OverlayHandle {
    fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let controller = self.controller.upgrade()?;
        let Ok(mut guard) = controller.try_borrow_mut() else {
            debug!("overlay controller busy; event dropped");
            return None;
        };
        Some(f(&mut guard))
    }

    /// Open an overlay; a rejected trigger is logged and reported as `false`.
    pub fn open(&self, content: OverlayContent, options: OpenOptions) -> bool {
        self.with(|ctrl| match ctrl.open(content, options) {
            Ok(()) => true,
            Err(err) => {
                debug!("overlay trigger ignored: {err}");
                false
            }
        })
        .unwrap_or(false)
    }

    pub fn close(&self) -> bool {
        self.with(Controller::close).unwrap_or(false)
    }

    pub fn next(&self) -> Option<usize> {
        self.with(Controller::next).flatten()
    }

    pub fn previous(&self) -> Option<usize> {
        self.with(Controller::previous).flatten()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller
            .upgrade()
            .and_then(|ctrl| ctrl.try_borrow().ok().map(|ctrl| ctrl.is_open()))
            .unwrap_or(false)
    }

    #[must_use]
    pub fn probe_timeout_ms(&self) -> u32 {
        self.controller
            .upgrade()
            .and_then(|ctrl| ctrl.try_borrow().ok().map(|ctrl| ctrl.config().probe_timeout_ms))
            .unwrap_or_else(|| OverlayConfig::default().probe_timeout_ms)
    }

    /// Snapshot of what is currently shown.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.controller
            .upgrade()
            .and_then(|ctrl| {
                ctrl.try_borrow().ok().map(|ctrl| OverlayState {
                    open: ctrl.is_open(),
                    target: ctrl.current_target().map(str::to_string),
                    index: ctrl.current_index(),
                })
            })
            .unwrap_or_default()
    }

    pub fn dispatch(&self, event: OverlayEvent) -> EventResponse {
        self.with(|ctrl| ctrl.handle_event(event))
            .unwrap_or_else(EventResponse::ignored)
    }
}

/// The page's single overlay controller plus every listener bound to it.
pub struct OverlayRuntime {
    controller: Rc<RefCell<Controller>>,
    bindings: Vec<EventListener>,
}

impl OverlayRuntime {
    /// Build the controller over the current document and register the
    /// navigation listener.
    ///
    /// # Errors
    /// Returns an error when no browser window/document is available or the
    /// `pagehide` listener cannot be registered.
    pub fn install(config: OverlayConfig) -> Result<Self, WebError> {
        let window = dom::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let surface = DomSurface::new(document, config.open_class.clone());
        let controller = Rc::new(RefCell::new(OverlayController::new(surface, config)));

        let handle = OverlayHandle {
            controller: Rc::downgrade(&controller),
        };
        controller
            .borrow_mut()
            .surface_mut()
            .set_listeners(shared_listeners(&handle));

        let on_leave = handle.clone();
        let pagehide = EventListener::new(window.as_ref(), "pagehide", move |_event| {
            on_leave.dispatch(OverlayEvent::NavigateAway);
        })?;

        debug!("overlay runtime installed");
        Ok(Self {
            controller,
            bindings: vec![pagehide],
        })
    }

    #[must_use]
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle {
            controller: Rc::downgrade(&self.controller),
        }
    }

    /// Keep `listener` alive for the runtime's lifetime.
    pub fn bind(&mut self, listener: EventListener) {
        self.bindings.push(listener);
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Close any open overlay and remove every listener.
    pub fn teardown(mut self) {
        self.bindings.clear();
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            debug!("overlay runtime busy; teardown left to drop");
            return;
        };
        controller.close();
        drop(controller.surface_mut().take_listeners());
        debug!("overlay runtime torn down");
    }
}

fn shared_listeners(handle: &OverlayHandle) -> SharedListeners {
    let keys = handle.clone();
    let keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let input = KeyInput {
            key: Key::from_dom_key(&key_event.key()),
            shift: key_event.shift_key(),
        };
        if keys.dispatch(OverlayEvent::Key(input)).prevent_default {
            event.prevent_default();
        }
    });

    let clicks = handle.clone();
    let click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(overlay_event) = classify_click(&event) else {
            return;
        };
        if clicks.dispatch(overlay_event).prevent_default {
            event.prevent_default();
        }
    });

    SharedListeners { keydown, click }
}

/// Translate a click on an open container into an overlay event.
///
/// The container doubles as the backdrop: a click landing on it directly (or
/// on a `[data-overlay-backdrop]` element) is outside the content panel.
#[must_use]
pub fn classify_click(event: &Event) -> Option<OverlayEvent> {
    let container = event.current_target()?.dyn_into::<Element>().ok()?;
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let synthetic = event
        .dyn_ref::<MouseEvent>()
        .is_some_and(|mouse| mouse.detail() == 0);

    let within = |selector: &str| {
        target
            .closest(selector)
            .ok()
            .flatten()
            .is_some_and(|found| container.contains(Some(found.as_ref())))
    };

    if target == container || within(BACKDROP_SELECTOR) {
        return Some(OverlayEvent::Pointer {
            target: PointerTarget::Backdrop,
            synthetic,
        });
    }
    if within(CLOSE_SELECTOR) {
        return Some(OverlayEvent::CloseControl);
    }
    if within(NEXT_SELECTOR) {
        return Some(OverlayEvent::NextItem);
    }
    if within(PREVIOUS_SELECTOR) {
        return Some(OverlayEvent::PreviousItem);
    }
    Some(OverlayEvent::Pointer {
        target: PointerTarget::Panel,
        synthetic,
    })
}
