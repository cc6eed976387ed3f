//! Product List Component
//!
//! Sidebar of selectable products. Exactly one entry is active.

use leptos::*;

use crate::state::GlobalState;

/// Product sidebar
#[component]
pub fn ProductList(
    /// Called with the pid of the clicked product
    on_select: Callback<String>,
    /// Rendered after the last product (the add-product form)
    children: Children,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selection = state.products;

    view! {
        <aside id="productList" class="product-list">
            <h2>"Products"</h2>
            {move || {
                let current = selection.get();
                if current.is_empty() && state.products_loaded.get() {
                    view! { <p class="muted">"No products found."</p> }.into_view()
                } else {
                    current
                        .products()
                        .iter()
                        .map(|p| {
                            let pid = p.pid.clone();
                            let pid_for_class = p.pid.clone();
                            view! {
                                <button
                                    class="product-btn"
                                    class:active=move || selection.with(|s| s.is_active(&pid_for_class))
                                    on:click=move |_| on_select.call(pid.clone())
                                >
                                    <div class="product-btn-body">
                                        <span>{p.name.clone()}</span>
                                        <small>{p.pid.clone()}</small>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()
                }
            }}
            {children()}
        </aside>
    }
}
