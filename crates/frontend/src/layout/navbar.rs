//! Top navigation bar shown on every protected screen.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <A href="/dashboard" attr:class="navbar__brand">
                "NEXTZONE"
            </A>
            <div class="navbar__links">
                <A href="/dashboard" attr:class="navbar__link">
                    {icon("dashboard")}
                    <span>"Dashboard"</span>
                </A>
                <A href="/products" attr:class="navbar__link">
                    {icon("package")}
                    <span>"Productos"</span>
                </A>
                <A href="/colors" attr:class="navbar__link">
                    {icon("palette")}
                    <span>"Colores"</span>
                </A>
                <A href="/categories" attr:class="navbar__link">
                    {icon("dashboard")}
                    <span>"Categorías"</span>
                </A>
                <A href="/sales" attr:class="navbar__link">
                    {icon("cart")}
                    <span>"Ventas"</span>
                </A>
            </div>
            <button class="navbar__logout" on:click=on_logout>
                {icon("power")}
                <span>"Salir"</span>
            </button>
        </nav>
    }
}
