//! Sales history with date filters and server-side aggregates.

use contracts::domain::sale::Sale;
use contracts::shared::envelope::SalesReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

use crate::domain::sale::api;

#[component]
pub fn SaleList(refresh: RwSignal<u32>) -> impl IntoView {
    let report = RwSignal::new(None::<SalesReport>);
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let flash = Flash::new();

    Effect::new(move |_| {
        refresh.get();
        let start = start_date.get();
        let end = end_date.get();
        loading.set(true);
        spawn_local(async move {
            let start = (!start.is_empty()).then_some(start);
            let end = (!end.is_empty()).then_some(end);
            match api::fetch_sales(start.as_deref(), end.as_deref()).await {
                Ok(r) => report.set(Some(r)),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    // Client-side narrowing on top of the server's date filter.
    let filtered = move || -> Vec<Sale> {
        let term = search.get().to_lowercase();
        let Some(report) = report.get() else {
            return Vec::new();
        };
        report
            .data
            .into_iter()
            .filter(|sale| {
                term.is_empty()
                    || sale
                        .items
                        .iter()
                        .any(|item| item.name.to_lowercase().contains(&term))
                    || sale
                        .comment
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
                    || sale.short_id().to_lowercase().contains(&term)
            })
            .collect()
    };

    view! {
        <section class="sale-list">
            <FlashMessages flash=flash />
            <div class="sale-list__summary">
                <div class="kpi">
                    <span class="kpi__label">{icon("cart")} " Ventas"</span>
                    <span class="kpi__value">
                        {move || report.get().map(|r| r.count).unwrap_or(0)}
                    </span>
                </div>
                <div class="kpi">
                    <span class="kpi__label">{icon("dollar")} " Ingresos"</span>
                    <span class="kpi__value">
                        {move || format_money(report.get().map(|r| r.total_revenue).unwrap_or(0.0))}
                    </span>
                </div>
                <div class="kpi">
                    <span class="kpi__label">{icon("trending")} " Ganancia"</span>
                    <span class="kpi__value">
                        {move || format_money(report.get().map(|r| r.total_profit).unwrap_or(0.0))}
                    </span>
                </div>
            </div>

            <div class="sale-list__filters">
                <div class="list__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Buscar venta..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <label>
                    "Desde"
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        on:change=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Hasta"
                    <input
                        type="date"
                        prop:value=move || end_date.get()
                        on:change=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list__loading">"Cargando..."</p> }
            >
                <table class="sale-list__table">
                    <thead>
                        <tr>
                            <th>"Venta"</th>
                            <th>"Fecha"</th>
                            <th>"Artículos"</th>
                            <th>"Total"</th>
                            <th>"Comentario"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|sale| sale.id.clone()
                            children=move |sale| {
                                let items = sale
                                    .items
                                    .iter()
                                    .map(|i| format!("{} x{}", i.name, i.quantity))
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <tr>
                                        <td>"#" {sale.short_id().to_string()}</td>
                                        <td>{sale.created_at.format("%d/%m/%Y %H:%M").to_string()}</td>
                                        <td>{items}</td>
                                        <td>{format_money(sale.total_amount)}</td>
                                        <td>{sale.comment.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
