pub mod create;
pub mod list;

use leptos::prelude::*;

use create::CreateSale;
use list::SaleList;

#[component]
pub fn SalePage() -> impl IntoView {
    // Bumped after a recorded sale so the listing refetches.
    let refresh = RwSignal::new(0u32);

    view! {
        <div class="page page--sales">
            <h1 class="page__title">"Ventas"</h1>
            <CreateSale refresh=refresh />
            <SaleList refresh=refresh />
        </div>
    }
}
