//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use crewcommune_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, ScrollBehavior, ScrollToOptions, SubmitEvent, Window};

/// Attribute naming the cursor look over an element (`"image"` or anything else).
pub const CURSOR_HOVER_ATTR: &str = "data-cursor-hover";
/// Marker attribute that shrinks the cursor.
pub const CURSOR_MAGNETIC_ATTR: &str = "data-cursor-magnetic";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Scrolling
// =============================================================================

/// Jump the window to (0, 0) without smooth scrolling.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Window scroll used by the navigator.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        scroll_to_top();
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Inner width and height of the window in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Top edge and height of an element relative to the viewport.
pub fn element_span(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.height())
}

// =============================================================================
// Cursor
// =============================================================================

/// Resolve the cursor hints for the element under the pointer.
///
/// Returns the nearest `data-cursor-hover` value and whether any ancestor
/// is marked `data-cursor-magnetic`.
pub fn cursor_target(target: Option<EventTarget>) -> (Option<String>, bool) {
    let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return (None, false);
    };
    let closest = |attr: &str| element.closest(&format!("[{}]", attr)).ok().flatten();

    let hover = closest(CURSOR_HOVER_ATTR).and_then(|e| e.get_attribute(CURSOR_HOVER_ATTR));
    let magnetic = closest(CURSOR_MAGNETIC_ATTR).is_some();
    (hover, magnetic)
}

// =============================================================================
// Misc
// =============================================================================

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Stop a form from submitting; nothing is sent anywhere.
pub fn suppress_submit(ev: &SubmitEvent, form: &'static str) {
    ev.prevent_default();
    tracing::debug!(form, "form submission suppressed");
}
