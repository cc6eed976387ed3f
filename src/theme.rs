//! Theme Preference
//!
//! Light/dark flag persisted under a fixed key. The browser keeps it in
//! `localStorage`; anything implementing [`ThemeStore`] works.

/// Key the preference is stored under
pub const THEME_STORAGE_KEY: &str = "theme";

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything but `dark`/`light` is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Glyph on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    /// Accessible label of the toggle button
    pub fn toggle_label(&self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}

/// Persistent key/value slot for the preference
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Store backed by memory, used where nothing persists
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Saved preference, else the system colour scheme
pub fn preferred_theme<S: ThemeStore + ?Sized>(store: &S, system_prefers_dark: bool) -> Theme {
    store
        .load()
        .and_then(|saved| Theme::parse(&saved))
        .unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
}

/// Flip the theme and persist the new value
pub fn toggle_theme<S: ThemeStore + ?Sized>(store: &mut S, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next.as_str());
    next
}
