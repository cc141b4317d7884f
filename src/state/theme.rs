#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme, toggled by the navbar button and persisted across sessions.
///
/// Provided as an `RwSignal<Theme>` context from the root component rather
/// than a module-level global, so every consumer reads the same injected
/// value and tests can construct themes freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable string form, used as the persisted localStorage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown strings return `None` so the caller
    /// can fall through to the system preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
