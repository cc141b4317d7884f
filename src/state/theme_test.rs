use super::*;

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_twice_round_trips() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

// =============================================================
// Persisted value domain
// =============================================================

#[test]
fn as_str_matches_value_domain() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_round_trips_both_themes() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn persisted_value_matches_last_toggle() {
    let mut theme = Theme::Light;
    theme = theme.toggled();
    assert_eq!(theme.as_str(), "dark");
    theme = theme.toggled();
    assert_eq!(theme.as_str(), "light");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}
