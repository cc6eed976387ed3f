//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use reviewlens::{ProductSelection, Theme};

use crate::state::theme;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active colour scheme
    pub theme: RwSignal<Theme>,
    /// Products in the sidebar and the active one
    pub products: RwSignal<ProductSelection>,
    /// Product list has been fetched (successfully or not)
    pub products_loaded: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let initial = theme::initial_theme();
    theme::apply(initial);

    let state = GlobalState {
        theme: create_rw_signal(initial),
        products: create_rw_signal(ProductSelection::default()),
        products_loaded: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Flip the theme, persist it and apply it to the document
    pub fn toggle_theme(&self) {
        let next = theme::toggle(self.theme.get_untracked());
        self.theme.set(next);
    }
}
