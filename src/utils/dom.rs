//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Set the browser tab title.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Scroll the page back to the top (used on navigation).
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Body Scroll Lock
// =============================================================================

/// Disable page scrolling while a modal is open.
///
/// Returns the previous `overflow` value so [`unlock_body_scroll`] can
/// restore it exactly.
pub fn lock_body_scroll() -> Option<String> {
    let style = body()?.style();
    let previous = style.get_property_value("overflow").ok()?;
    let _ = style.set_property("overflow", "hidden");
    Some(previous)
}

/// Restore the `overflow` value captured by [`lock_body_scroll`].
pub fn unlock_body_scroll(previous: &str) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", previous)
        };
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_body_scroll_lock_restores_previous_value() {
        let style = body().unwrap().style();
        style.set_property("overflow", "auto").unwrap();

        let previous = lock_body_scroll().unwrap();
        assert_eq!(previous, "auto");
        assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");

        unlock_body_scroll(&previous);
        assert_eq!(style.get_property_value("overflow").unwrap(), "auto");
    }

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#/notice-board");
        assert_eq!(get_hash(), "/notice-board");
    }
}
