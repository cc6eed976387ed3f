//! Theme Toggle Component

use leptos::*;

use crate::state::GlobalState;

/// Light/dark switch button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            aria-pressed=move || theme.get().is_dark().to_string()
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| state.toggle_theme()
        >
            <span id="theme-icon">{move || theme.get().icon()}</span>
        </button>
    }
}
