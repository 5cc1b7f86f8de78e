use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::auth::context::Session;

#[component]
pub fn App() -> impl IntoView {
    // Session lifecycle: init reads the persisted credential once, logout is
    // the only teardown. Provided via context to every screen that gates
    // access or attaches credentials to requests.
    provide_context(Session::init());

    view! {
        <AppRoutes />
    }
}
