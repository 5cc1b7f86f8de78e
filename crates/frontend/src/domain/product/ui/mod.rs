pub mod details;
pub mod inventory;

use leptos::prelude::*;

use details::CreateProductForm;
use inventory::ProductInventory;

#[component]
pub fn ProductPage() -> impl IntoView {
    let refresh = RwSignal::new(0u32);
    // The create form starts collapsed so the inventory is the first thing
    // the seller sees.
    let show_form = RwSignal::new(false);

    view! {
        <div class="page page--products">
            <div class="page__header">
                <h1 class="page__title">"Productos"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| show_form.update(|v| *v = !*v)
                >
                    {move || if show_form.get() { "Cerrar" } else { "Nuevo producto" }}
                </button>
            </div>
            <Show when=move || show_form.get()>
                <CreateProductForm refresh=refresh show_form=show_form />
            </Show>
            <ProductInventory refresh=refresh />
        </div>
    }
}
