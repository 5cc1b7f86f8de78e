//! Landing dashboard: sales aggregates, stock alerts and quick navigation.

use contracts::domain::product::Product;
use contracts::domain::sale::Sale;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::product::api as product_api;
use crate::domain::sale::api as sale_api;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let revenue = RwSignal::new(0.0f64);
    let profit = RwSignal::new(0.0f64);
    let sale_count = RwSignal::new(0u32);
    let recent_sales = RwSignal::new(Vec::<Sale>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let flash = Flash::new();

    Effect::new(move |_| {
        spawn_local(async move {
            match sale_api::fetch_sales(None, None).await {
                Ok(report) => {
                    revenue.set(report.total_revenue);
                    profit.set(report.total_profit);
                    sale_count.set(report.count);
                    let mut sales = report.data;
                    sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    sales.truncate(5);
                    recent_sales.set(sales);
                }
                Err(e) => flash.error(e),
            }
            match product_api::fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    let product_count = move || products.read().iter().filter(|p| p.is_active).count();
    let low_stock_count = move || products.read().iter().filter(|p| p.is_low_stock()).count();

    view! {
        <div class="page page--dashboard">
            <h1 class="page__title">"Dashboard"</h1>
            <FlashMessages flash=flash />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list__loading">"Cargando..."</p> }
            >
                <div class="dashboard__kpis">
                    <div class="kpi">
                        <span class="kpi__label">{icon("dollar")} " Ingresos"</span>
                        <span class="kpi__value">{move || format_money(revenue.get())}</span>
                    </div>
                    <div class="kpi">
                        <span class="kpi__label">{icon("trending")} " Ganancia"</span>
                        <span class="kpi__value">{move || format_money(profit.get())}</span>
                    </div>
                    <div class="kpi">
                        <span class="kpi__label">{icon("cart")} " Ventas"</span>
                        <span class="kpi__value">{move || sale_count.get()}</span>
                    </div>
                    <div class="kpi">
                        <span class="kpi__label">{icon("package")} " Productos activos"</span>
                        <span class="kpi__value">{product_count}</span>
                    </div>
                    <div class="kpi kpi--alert">
                        <span class="kpi__label">{icon("alert")} " Stock bajo"</span>
                        <span class="kpi__value">{low_stock_count}</span>
                    </div>
                </div>

                <div class="dashboard__recent">
                    <h2>"Últimas ventas"</h2>
                    <Show
                        when=move || !recent_sales.read().is_empty()
                        fallback=|| view! { <p>"Todavía no hay ventas registradas"</p> }
                    >
                        <ul>
                            <For
                                each=move || recent_sales.get()
                                key=|sale| sale.id.clone()
                                children=move |sale| view! {
                                    <li>
                                        <span>"#" {sale.short_id().to_string()}</span>
                                        <span>{sale.created_at.format("%d/%m/%Y %H:%M").to_string()}</span>
                                        <span>{format_money(sale.total_amount)}</span>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </div>

                <div class="dashboard__shortcuts">
                    <A href="/sales" attr:class="shortcut">
                        {icon("cart")}
                        <span>"Registrar venta"</span>
                    </A>
                    <A href="/products" attr:class="shortcut">
                        {icon("package")}
                        <span>"Inventario"</span>
                    </A>
                    <A href="/colors" attr:class="shortcut">
                        {icon("palette")}
                        <span>"Colores"</span>
                    </A>
                    <A href="/categories" attr:class="shortcut">
                        {icon("dashboard")}
                        <span>"Categorías"</span>
                    </A>
                </div>
            </Show>
        </div>
    }
}
