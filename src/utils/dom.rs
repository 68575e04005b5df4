//! DOM and Web API utility functions.
//!
//! Thin `Option`-returning wrappers; callers ignore failures where nothing
//! useful can be done about them.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document body.
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Whether the element matched by `selector` currently has focus.
pub fn is_focused(selector: &str) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.matches(":focus").ok())
        .unwrap_or(false)
}

/// Add or remove a single body class.
pub fn toggle_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Reload the page, resetting every bit of session state.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn clock_time() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}
