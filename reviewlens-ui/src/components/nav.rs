//! Navigation Component
//!
//! Header with brand, links, theme toggle and the mobile menu button.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::components::ThemeToggle;
use crate::state::NavMenu;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let menu = create_rw_signal(NavMenu::default());
    let nav_ref = create_node_ref::<html::Nav>();
    let toggle_ref = create_node_ref::<html::Button>();

    // Close the open menu on clicks outside of it
    let listener = window_event_listener(ev::click, move |ev| {
        if !menu.get_untracked().open {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside_menu = nav_ref
            .get_untracked()
            .map_or(false, |nav| nav.contains(Some(&target)));
        let on_toggle = toggle_ref
            .get_untracked()
            .map_or(false, |button| button.contains(Some(&target)));

        menu.update(|m| m.document_click(inside_menu, on_toggle));
    });
    on_cleanup(move || listener.remove());

    view! {
        <header class="header">
            <div class="container header-inner">
                <A href="/" class="brand">
                    <span class="brand-icon">"🔎"</span>
                    <span class="brand-name">"ReviewLens"</span>
                </A>

                <button
                    node_ref=toggle_ref
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().aria_expanded()
                    on:click=move |_| menu.update(|m| {
                        m.toggle();
                    })
                >
                    "☰"
                </button>

                <nav node_ref=nav_ref class="nav" class:open=move || menu.get().open>
                    <NavLink href="/" label="Home" />
                    <NavLink href="/dashboard" label="Dashboard" />
                </nav>

                <ThemeToggle />
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}
