//! Route table for the whole application.
//!
//! `/login` and `/register` are public; everything else sits under
//! [`ProtectedLayout`], which redirects unauthenticated visitors to the
//! login screen. Unknown paths fall back to the dashboard.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::DashboardPage;
use crate::domain::category::ui::details::EditCategoryPage;
use crate::domain::category::ui::CategoryPage;
use crate::domain::color::ui::details::EditColorPage;
use crate::domain::color::ui::ColorPage;
use crate::domain::product::ui::details::EditProductPage;
use crate::domain::product::ui::ProductPage;
use crate::domain::sale::ui::SalePage;
use crate::system::auth::guard::ProtectedLayout;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard" /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/products") view=ProductPage />
                    <Route path=path!("/edit-product/:id") view=EditProductPage />
                    <Route path=path!("/categories") view=CategoryPage />
                    <Route path=path!("/edit-category/:id") view=EditCategoryPage />
                    <Route path=path!("/colors") view=ColorPage />
                    <Route path=path!("/edit-color/:id") view=EditColorPage />
                    <Route path=path!("/sales") view=SalePage />
                    <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
