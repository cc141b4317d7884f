#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::theme::Theme;

/// Scroll offset (in CSS pixels) past which the navbar switches to its
/// "scrolled" styling.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Classes shared by both navbar states.
pub const NAV_BASE: &str = "fixed w-full top-0 left-0 z-30 transition-all duration-300 ease-in-out";

/// Level-triggered scroll state: re-evaluated on every scroll event.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Navbar container background/border classes.
pub fn container_class(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-gray-100/90 dark:bg-black/50 backdrop-blur-lg shadow-md dark:shadow-lg border-b border-gray-200/50 dark:border-white/10"
    } else {
        "bg-transparent border-b border-gray-900/10 dark:border-white/10"
    }
}

// The four tables below are the navbar's color contract: a fixed lookup
// over (scrolled, theme). Scrolled styling carries its own dark: variants,
// so both themes share one entry there.

/// Plain text color (clock readout and similar).
pub fn text_class(scrolled: bool, theme: Theme) -> &'static str {
    match (scrolled, theme) {
        (true, Theme::Light | Theme::Dark) => "text-gray-800 dark:text-white",
        (false, Theme::Light) => "text-gray-800",
        (false, Theme::Dark) => "text-white",
    }
}

/// Navigation link color.
pub fn link_class(scrolled: bool, theme: Theme) -> &'static str {
    match (scrolled, theme) {
        (true, Theme::Light | Theme::Dark) => {
            "text-gray-600 hover:text-blue-600 dark:text-gray-300 dark:hover:text-white"
        }
        (false, Theme::Light) => "text-gray-700 hover:text-blue-600",
        (false, Theme::Dark) => "text-gray-200 hover:text-white",
    }
}

/// Active navigation link color.
pub fn active_link_class(scrolled: bool, theme: Theme) -> &'static str {
    match (scrolled, theme) {
        (true, Theme::Light | Theme::Dark) => "!text-blue-600 dark:!text-blue-400",
        (false, Theme::Light) => {
            "!text-blue-700 underline underline-offset-4 decoration-blue-700"
        }
        (false, Theme::Dark) => "!text-white underline underline-offset-4 decoration-white",
    }
}

/// Theme toggle button color.
pub fn toggle_class(scrolled: bool, theme: Theme) -> &'static str {
    match (scrolled, theme) {
        (true, Theme::Light | Theme::Dark) => {
            "text-gray-600 hover:text-blue-600 hover:bg-gray-200/50 dark:text-gray-300 dark:hover:text-white dark:hover:bg-white/10 focus:ring-blue-500"
        }
        (false, Theme::Light) => "text-gray-700 hover:text-blue-600 hover:bg-black/5",
        (false, Theme::Dark) => {
            "text-gray-200 hover:text-white hover:bg-white/10 focus:ring-white"
        }
    }
}
