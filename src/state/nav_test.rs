use super::*;

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn not_scrolled_at_or_below_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
}

#[test]
fn scrolled_above_threshold() {
    assert!(is_scrolled(50.1));
    assert!(is_scrolled(51.0));
    assert!(is_scrolled(2000.0));
}

// =============================================================
// Container classes
// =============================================================

#[test]
fn container_class_switches_on_scroll() {
    assert_eq!(
        container_class(true),
        "bg-gray-100/90 dark:bg-black/50 backdrop-blur-lg shadow-md dark:shadow-lg border-b border-gray-200/50 dark:border-white/10"
    );
    assert_eq!(
        container_class(false),
        "bg-transparent border-b border-gray-900/10 dark:border-white/10"
    );
}

// =============================================================
// (scrolled, theme) lookup tables — all 8 combinations per table
// =============================================================

#[test]
fn text_class_table() {
    assert_eq!(text_class(true, Theme::Light), "text-gray-800 dark:text-white");
    assert_eq!(text_class(true, Theme::Dark), "text-gray-800 dark:text-white");
    assert_eq!(text_class(false, Theme::Light), "text-gray-800");
    assert_eq!(text_class(false, Theme::Dark), "text-white");
}

#[test]
fn link_class_table() {
    assert_eq!(
        link_class(true, Theme::Light),
        "text-gray-600 hover:text-blue-600 dark:text-gray-300 dark:hover:text-white"
    );
    assert_eq!(
        link_class(true, Theme::Dark),
        "text-gray-600 hover:text-blue-600 dark:text-gray-300 dark:hover:text-white"
    );
    assert_eq!(link_class(false, Theme::Light), "text-gray-700 hover:text-blue-600");
    assert_eq!(link_class(false, Theme::Dark), "text-gray-200 hover:text-white");
}

#[test]
fn active_link_class_table() {
    assert_eq!(
        active_link_class(true, Theme::Light),
        "!text-blue-600 dark:!text-blue-400"
    );
    assert_eq!(
        active_link_class(true, Theme::Dark),
        "!text-blue-600 dark:!text-blue-400"
    );
    assert_eq!(
        active_link_class(false, Theme::Light),
        "!text-blue-700 underline underline-offset-4 decoration-blue-700"
    );
    assert_eq!(
        active_link_class(false, Theme::Dark),
        "!text-white underline underline-offset-4 decoration-white"
    );
}

#[test]
fn toggle_class_table() {
    assert_eq!(
        toggle_class(true, Theme::Light),
        "text-gray-600 hover:text-blue-600 hover:bg-gray-200/50 dark:text-gray-300 dark:hover:text-white dark:hover:bg-white/10 focus:ring-blue-500"
    );
    assert_eq!(
        toggle_class(true, Theme::Dark),
        "text-gray-600 hover:text-blue-600 hover:bg-gray-200/50 dark:text-gray-300 dark:hover:text-white dark:hover:bg-white/10 focus:ring-blue-500"
    );
    assert_eq!(
        toggle_class(false, Theme::Light),
        "text-gray-700 hover:text-blue-600 hover:bg-black/5"
    );
    assert_eq!(
        toggle_class(false, Theme::Dark),
        "text-gray-200 hover:text-white hover:bg-white/10 focus:ring-white"
    );
}
