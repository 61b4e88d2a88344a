//! DOM focus, viewport, and scroll helpers shared by the widget components.

use leptos::logging;
use wasm_bindgen::JsCast;

use selection_core::ViewportSize;

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Current viewport dimensions in CSS pixels.
///
/// Falls back to a zero-size viewport when the window is unavailable, which
/// pins clamped surfaces to the margin corner instead of panicking.
pub(crate) fn viewport_size() -> ViewportSize {
    let Some(window) = web_sys::window() else {
        logging::warn!("viewport lookup failed: no window");
        return ViewportSize {
            width: 0,
            height: 0,
        };
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|raw| raw.as_f64())
        .unwrap_or_default() as i32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|raw| raw.as_f64())
        .unwrap_or_default() as i32;
    ViewportSize { width, height }
}

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.style())
}

/// Suspends document scrolling while a modal overlay is open.
pub(crate) fn suspend_body_scroll() {
    let Some(style) = body_style() else {
        logging::warn!("scroll suspension skipped: no document body");
        return;
    };
    let _ = style.set_property("overflow", "hidden");
}

/// Restores document scrolling; safe to call when scrolling was never suspended.
pub(crate) fn restore_body_scroll() {
    let Some(style) = body_style() else {
        return;
    };
    let _ = style.remove_property("overflow");
}
