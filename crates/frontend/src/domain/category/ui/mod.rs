pub mod details;
pub mod list;

use leptos::prelude::*;

use details::CreateCategoryForm;
use list::CategoryList;

#[component]
pub fn CategoryPage() -> impl IntoView {
    // Bumped after every mutation so the list refetches.
    let refresh = RwSignal::new(0u32);

    view! {
        <div class="page page--categories">
            <h1 class="page__title">"Categorías"</h1>
            <CreateCategoryForm refresh=refresh />
            <CategoryList refresh=refresh />
        </div>
    }
}
