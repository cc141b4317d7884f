//! Theme preference initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element (Tailwind's class-mode dark variant).
//! Toggle writes the new value back to `localStorage` and updates the
//! class. Storage failures are ignored.

use crate::state::theme::Theme;

const STORAGE_KEY: &str = "portfolio_theme";

/// Resolve the initial theme.
///
/// A persisted `"light"`/`"dark"` value wins; otherwise the OS-level
/// `prefers-color-scheme` preference decides; otherwise light.
pub fn initial() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::Light;
    };

    // Check localStorage first.
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            if let Some(theme) = Theme::parse(&value) {
                return theme;
            }
        }
    }

    // Fall back to system preference.
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches());
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        if theme.is_dark() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

/// Flip the theme, apply it to the document, and persist the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
