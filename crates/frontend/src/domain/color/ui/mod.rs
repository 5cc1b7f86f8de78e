pub mod details;
pub mod list;

use leptos::prelude::*;

use details::CreateColorForm;
use list::ColorList;

#[component]
pub fn ColorPage() -> impl IntoView {
    let refresh = RwSignal::new(0u32);

    view! {
        <div class="page page--colors">
            <h1 class="page__title">"Colores"</h1>
            <CreateColorForm refresh=refresh />
            <ColorList refresh=refresh />
        </div>
    }
}
