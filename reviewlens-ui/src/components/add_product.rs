//! Add Product Component
//!
//! Registers a product with the backend, which scrapes and analyzes its
//! reviews before answering. The new product is then selected.

use leptos::*;

use reviewlens::{DashboardSource, NewProduct, Product};

use crate::api::GlooSource;

/// Inline add-product form
#[component]
pub fn AddProduct(
    /// Called with the product the backend registered
    on_added: Callback<Product>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (pid, set_pid) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (status, set_status) = create_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let new_product = NewProduct {
            pid: pid.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
        };
        if new_product.pid.is_empty() || new_product.name.is_empty() {
            set_status.set(Some("pid and name are required".to_string()));
            return;
        }

        set_busy.set(true);
        set_status.set(Some("Scraping reviews…".to_string()));

        spawn_local(async move {
            match GlooSource::default().add_product(&new_product).await {
                Ok(response) => {
                    set_status.set(Some(response.message.clone()));
                    set_pid.set(String::new());
                    set_name.set(String::new());
                    set_open.set(false);
                    on_added.call(response.product);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to add product: {}", e).into());
                    set_status.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="add-product">
            <button id="openProductModal" class="btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                "+ Add product"
            </button>

            <Show when=move || open.get()>
                <form class="add-product-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Product id"
                        prop:value=move || pid.get()
                        on:input=move |ev| set_pid.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Add"
                    </button>
                </form>
            </Show>

            {move || status.get().map(|msg| view! { <p class="muted">{msg}</p> })}
        </div>
    }
}
