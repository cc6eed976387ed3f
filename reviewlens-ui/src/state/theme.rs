//! Theme persistence and application.
//!
//! Reads the preference from `localStorage` under the shared key, falls
//! back to `prefers-color-scheme`, and sets `data-theme` on `<html>`.

use reviewlens::theme::{preferred_theme, toggle_theme, ThemeStore, THEME_STORAGE_KEY};
use reviewlens::Theme;

/// [`ThemeStore`] backed by `window.localStorage`
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, value);
        }
    }
}

/// Whether the OS asks for a dark colour scheme
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Theme to start with on page load
pub fn initial_theme() -> Theme {
    preferred_theme(&LocalThemeStore, system_prefers_dark())
}

/// Set `data-theme` on the root element
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Flip, persist and apply
pub fn toggle(current: Theme) -> Theme {
    let next = toggle_theme(&mut LocalThemeStore, current);
    apply(next);
    next
}
