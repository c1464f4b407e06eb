#![forbid(unsafe_code)]
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod listener;
pub mod preview;
pub mod runtime;
pub mod surface;
pub mod triggers;

pub use error::WebError;
pub use runtime::{OverlayHandle, OverlayRuntime, OverlayState};
pub use surface::DomSurface;

thread_local! {
    static RUNTIME: RefCell<Option<OverlayRuntime>> = const { RefCell::new(None) };
}

/// Install the page runtime and bind every declarative trigger.
///
/// Replaces (and tears down) a previously installed runtime.
///
/// # Errors
/// Returns an error if the browser environment is unavailable or a listener
/// cannot be registered.
pub fn install_page() -> Result<OverlayHandle, WebError> {
    uninstall();
    let document = dom::document().ok_or(WebError::NoDocument)?;
    let mut runtime = OverlayRuntime::install(config::load_page_config(&document))?;
    let triggers = triggers::bind_triggers(&mut runtime, &document)?;
    let figures = gallery::bind_galleries(&mut runtime, &document)?;
    let previews = preview::bind_previews(&mut runtime, &document)?;
    log::debug!("overlay page ready: {triggers} triggers, {figures} gallery items, {previews} previews");
    let handle = runtime.handle();
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
    Ok(handle)
}

/// Tear down the installed runtime, if any.
pub fn uninstall() {
    if let Some(runtime) = RUNTIME.with(|slot| slot.borrow_mut().take()) {
        runtime.teardown();
    }
}

/// Run `f` against the installed runtime.
pub fn with_installed<R>(f: impl FnOnce(&OverlayHandle) -> R) -> Option<R> {
    let handle = RUNTIME.with(|slot| slot.borrow().as_ref().map(OverlayRuntime::handle))?;
    Some(f(&handle))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = install_page() {
        dom::console_error(&format!("overlay runtime unavailable: {err}"));
    }
}
