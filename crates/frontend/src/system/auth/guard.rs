use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use super::context::use_session;
use crate::layout::navbar::NavBar;

/// Layout for every private route: bounces unauthenticated visitors to the
/// login screen, otherwise renders the nav bar plus the matched child route.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <NavBar />
            <main class="app-main">
                <Outlet />
            </main>
        </Show>
    }
}
