//! Product form: create (inline on the products page) and edit (own route).
//!
//! Variant rows are dynamic; each row picks a color from the active palette
//! and carries its own stock and prices. Rows keep their signals so typing in
//! one field never re-renders the others.

use contracts::domain::category::Category;
use contracts::domain::color::Color;
use contracts::domain::product::{ProductDto, VariantDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::category::api as category_api;
use crate::domain::color::api as color_api;
use crate::domain::product::api;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

#[derive(Clone)]
struct VariantRow {
    key: u64,
    id: Option<String>,
    color: RwSignal<String>,
    amount: RwSignal<String>,
    price_cost: RwSignal<String>,
    price_sell: RwSignal<String>,
}

impl VariantRow {
    fn new(key: u64, dto: VariantDto) -> Self {
        Self {
            key,
            id: dto.id,
            color: RwSignal::new(dto.color),
            amount: RwSignal::new(dto.amount.to_string()),
            price_cost: RwSignal::new(dto.price_cost.to_string()),
            price_sell: RwSignal::new(dto.price_sell.to_string()),
        }
    }

    /// Collects the row back into a DTO; `None` if a numeric field is garbage.
    fn to_dto(&self) -> Option<VariantDto> {
        Some(VariantDto {
            id: self.id.clone(),
            color: self.color.get_untracked(),
            amount: self.amount.get_untracked().trim().parse().ok()?,
            price_cost: self.price_cost.get_untracked().trim().parse().ok()?,
            price_sell: self.price_sell.get_untracked().trim().parse().ok()?,
        })
    }
}

#[component]
fn ProductForm<F>(
    initial: ProductDto,
    submit_label: &'static str,
    flash: Flash,
    saving: RwSignal<bool>,
    on_save: F,
) -> impl IntoView
where
    F: Fn(ProductDto) + 'static,
{
    let name = RwSignal::new(initial.name.clone());
    let category = RwSignal::new(initial.category.clone());
    let min_stock = RwSignal::new(initial.min_stock_alert.to_string());
    let next_key = RwSignal::new(0u64);
    let rows = RwSignal::new(Vec::<VariantRow>::new());

    for dto in initial.variants {
        let key = next_key.get_untracked();
        next_key.set(key + 1);
        rows.update(|r| r.push(VariantRow::new(key, dto)));
    }

    let categories = RwSignal::new(Vec::<Category>::new());
    let colors = RwSignal::new(Vec::<Color>::new());
    spawn_local(async move {
        match category_api::fetch_categories().await {
            Ok(list) => categories.set(list.into_iter().filter(|c| c.is_active).collect()),
            Err(e) => flash.error(e),
        }
        match color_api::fetch_colors().await {
            Ok(list) => colors.set(list.into_iter().filter(|c| c.is_active).collect()),
            Err(e) => flash.error(e),
        }
    });

    let add_row = move |_| {
        let key = next_key.get_untracked();
        next_key.set(key + 1);
        rows.update(|r| r.push(VariantRow::new(key, VariantDto::default())));
    };

    let remove_row = move |key: u64| {
        rows.update(|r| r.retain(|row| row.key != key));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let variants: Option<Vec<VariantDto>> =
            rows.get_untracked().iter().map(VariantRow::to_dto).collect();
        let Some(variants) = variants else {
            flash.error("Revisá los valores numéricos de las variantes");
            return;
        };
        let Ok(min_stock_alert) = min_stock.get_untracked().trim().parse() else {
            flash.error("La alerta de stock mínimo debe ser un número");
            return;
        };
        let dto = ProductDto {
            name: name.get_untracked().trim().to_string(),
            category: category.get_untracked(),
            min_stock_alert,
            variants,
        };
        if let Err(e) = dto.validate() {
            flash.error(e);
            return;
        }
        on_save(dto);
    };

    view! {
        <form class="form form--product" on:submit=on_submit>
            <label>
                "Nombre"
                <input
                    type="text"
                    placeholder="Nombre del producto"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Categoría"
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Seleccionar categoría"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=move |c| view! {
                            <option value=c.id.clone()>{c.name.clone()}</option>
                        }
                    />
                </select>
            </label>
            <label>
                "Alerta de stock mínimo"
                <input
                    type="number"
                    min="0"
                    prop:value=move || min_stock.get()
                    on:input=move |ev| min_stock.set(event_target_value(&ev))
                />
            </label>

            <div class="form__variants">
                <div class="form__variants-header">
                    <span>"Variantes"</span>
                    <button type="button" class="btn" on:click=add_row>
                        {icon("plus")}
                        " Agregar variante"
                    </button>
                </div>
                <For
                    each=move || rows.get()
                    key=|row| row.key
                    children=move |row| {
                        let key = row.key;
                        view! {
                            <div class="variant-edit">
                                <select
                                    prop:value=move || row.color.get()
                                    on:change=move |ev| row.color.set(event_target_value(&ev))
                                >
                                    <option value="">"Color"</option>
                                    <For
                                        each=move || colors.get()
                                        key=|c| c.id.clone()
                                        children=move |c| view! {
                                            <option value=c.id.clone()>{c.name.clone()}</option>
                                        }
                                    />
                                </select>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="Stock"
                                    prop:value=move || row.amount.get()
                                    on:input=move |ev| row.amount.set(event_target_value(&ev))
                                />
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    placeholder="Precio costo"
                                    prop:value=move || row.price_cost.get()
                                    on:input=move |ev| row.price_cost.set(event_target_value(&ev))
                                />
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    placeholder="Precio venta"
                                    prop:value=move || row.price_sell.get()
                                    on:input=move |ev| row.price_sell.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="btn btn--delete"
                                    on:click=move |_| remove_row(key)
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <div class="form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Guardando..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn CreateProductForm(refresh: RwSignal<u32>, show_form: RwSignal<bool>) -> impl IntoView {
    let flash = Flash::new();
    let saving = RwSignal::new(false);

    let on_save = move |dto: ProductDto| {
        saving.set(true);
        spawn_local(async move {
            match api::create_product(&dto).await {
                Ok(()) => {
                    flash.success("Producto creado con éxito");
                    show_form.set(false);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => flash.error(e),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="panel panel--create-product">
            <FlashMessages flash=flash />
            <ProductForm
                initial=ProductDto::default()
                submit_label="Crear producto"
                flash=flash
                saving=saving
                on_save=on_save
            />
        </div>
    }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let flash = Flash::new();
    let saving = RwSignal::new(false);
    let initial = RwSignal::new(None::<ProductDto>);
    let product_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = product_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => {
                    let dto = ProductDto {
                        name: product.name,
                        category: product.category.id().to_string(),
                        min_stock_alert: product.min_stock_alert,
                        variants: product
                            .variants
                            .into_iter()
                            .map(|v| VariantDto {
                                id: v.id,
                                color: v.color.id().to_string(),
                                amount: v.amount,
                                price_cost: v.price_cost,
                                price_sell: v.price_sell,
                            })
                            .collect(),
                    };
                    initial.set(Some(dto));
                }
                Err(e) => flash.error(e),
            }
        });
    });

    let on_save = move |dto: ProductDto| {
        let id = product_id.get_untracked();
        let navigate = navigate.clone();
        saving.set(true);
        spawn_local(async move {
            match api::update_product(&id, &dto).await {
                Ok(()) => navigate("/products", Default::default()),
                Err(e) => {
                    flash.error(e);
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--edit-product">
            <h1 class="page__title">"Editar producto"</h1>
            <FlashMessages flash=flash />
            {move || match initial.get() {
                None => view! { <p class="list__loading">"Cargando..."</p> }.into_any(),
                Some(dto) => view! {
                    <ProductForm
                        initial=dto
                        submit_label="Guardar cambios"
                        flash=flash
                        saving=saving
                        on_save=on_save.clone()
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
