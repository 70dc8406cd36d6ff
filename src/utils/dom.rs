//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage, Window};

use crate::models::Theme;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Get the `<html>` element.
fn root_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Reflect the theme on the document root.
///
/// Exactly one theme class is present afterwards. Themes with a root
/// background get inline styles; the others clear them.
pub fn apply_root_theme(theme: Theme) {
    let Some(root) = root_element() else {
        return;
    };

    let classes = root.class_list();
    for other in Theme::ALL {
        let _ = classes.remove_1(other.as_str());
    }
    let _ = classes.add_1(theme.as_str());

    let style = root.style();
    let (background, color) = theme.root_background().unwrap_or(("", ""));
    let _ = style.set_property("background", background);
    let _ = style.set_property("color", color);
}

/// Write a warning to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Write a warning to stderr when running off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(message: &str) {
    eprintln!("warning: {}", message);
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
