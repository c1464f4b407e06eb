use futures::future::{Either, select};
use futures::pin_mut;
use js_sys::{Function, Promise};
use overlay_core::ProbeOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, RequestInit, Response, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document of the current window.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Cast a node handle to an `HtmlElement`, dropping SVG and text nodes.
#[must_use]
pub fn as_html_element<T: JsCast>(node: T) -> Option<HtmlElement> {
    node.dyn_into::<HtmlElement>().ok()
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Issue a `HEAD` request and return the browser `Response`.
///
/// # Errors
/// Returns an error if no window is available, the request fails, or the
/// result cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_head(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let init = RequestInit::new();
    init.set_method("HEAD");
    let resp_value = JsFuture::from(win.fetch_with_str_and_init(url, &init)).await?;
    resp_value.dyn_into::<Response>()
}

/// Probe `url` with a `HEAD` request raced against `timeout_ms`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn probe(url: &str, timeout_ms: u32) -> ProbeOutcome {
    let request = fetch_head(url);
    let timeout = sleep_ms(i32::try_from(timeout_ms).unwrap_or(i32::MAX));
    pin_mut!(request);
    pin_mut!(timeout);
    match select(request, timeout).await {
        Either::Left((Ok(response), _)) => ProbeOutcome::from_status(response.status()),
        Either::Left((Err(err), _)) => {
            log::warn!("preview probe for {url} failed: {}", js_error_message(&err));
            ProbeOutcome::Failed
        }
        Either::Right(_) => {
            log::warn!("preview probe for {url} timed out after {timeout_ms}ms");
            ProbeOutcome::TimedOut
        }
    }
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(err) = win.open_with_url_and_target(url, "_blank") {
        console_error(&format!("could not open {url}: {}", js_error_message(&err)));
    }
}
