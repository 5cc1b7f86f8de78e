//! Inventory view: products grouped by category, with per-variant stock
//! controls.
//!
//! The ±1 buttons apply the change to the local snapshot first, then confirm
//! it against the backend. While a variant has a request in flight its
//! buttons stay disabled; a failed request rolls the optimistic change back.

use std::collections::{BTreeMap, HashSet};

use contracts::domain::product::Product;
use contracts::usecases::adjust_stock;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::product::api;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

type VariantKey = (String, String);

#[component]
pub fn ProductInventory(refresh: RwSignal<u32>) -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let pending = RwSignal::new(HashSet::<VariantKey>::new());
    let pending_delete = RwSignal::new(None::<Product>);
    let flash = Flash::new();

    Effect::new(move |_| {
        refresh.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    // Grouped and filtered snapshot, recomputed on every change.
    let grouped = move || {
        let term = search.get().to_lowercase();
        let mut groups: BTreeMap<String, Vec<Product>> = BTreeMap::new();
        for product in products.get() {
            let matches = term.is_empty()
                || product.name.to_lowercase().contains(&term)
                || product.category_name().to_lowercase().contains(&term);
            if !matches {
                continue;
            }
            groups
                .entry(product.category_name().to_string())
                .or_default()
                .push(product);
        }
        groups.into_iter().collect::<Vec<_>>()
    };

    let on_adjust = move |product_id: String, color_id: String, delta: i32| {
        let key = (product_id.clone(), color_id.clone());
        if pending.get_untracked().contains(&key) {
            return;
        }
        let mut rejection = None;
        products.update(|list| {
            if let Err(e) = adjust_stock::apply_delta(list, &product_id, &color_id, delta) {
                rejection = Some(e);
            }
        });
        if let Some(e) = rejection {
            flash.error(e.to_string());
            return;
        }
        pending.update(|p| {
            p.insert(key.clone());
        });
        spawn_local(async move {
            match api::adjust_stock(&product_id, &color_id, delta).await {
                Ok(server) => {
                    products.update(|list| {
                        adjust_stock::reconcile(list, server);
                    });
                }
                Err(e) => {
                    products.update(|list| {
                        adjust_stock::revert_delta(list, &product_id, &color_id, delta)
                    });
                    flash.error(e);
                }
            }
            pending.update(|p| {
                p.remove(&key);
            });
        });
    };

    let on_toggle = move |product: Product| {
        spawn_local(async move {
            match api::set_active(&product.id, !product.is_active).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => flash.error(e),
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => {
                    flash.success("Producto eliminado con éxito");
                    refresh.update(|n| *n += 1);
                }
                Err(e) => flash.error(e),
            }
        });
    };

    view! {
        <section class="inventory">
            <FlashMessages flash=flash />
            <div class="list__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Buscar producto..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list__loading">"Cargando..."</p> }
            >
                {move || grouped()
                    .into_iter()
                    .map(|(category, items)| view! {
                        <div class="inventory__group">
                            <h2 class="inventory__category">{category}</h2>
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|product| view! {
                                        <ProductCard
                                            product=product
                                            pending=pending
                                            on_adjust=on_adjust
                                            on_toggle=on_toggle
                                            pending_delete=pending_delete
                                        />
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </Show>
            {move || pending_delete.get().map(|product| view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <p>
                            "¿Eliminar el producto \""
                            {product.name.clone()}
                            "\"? Esta acción no se puede deshacer."
                        </p>
                        <div class="modal__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>
                                "Cancelar"
                            </button>
                            <button class="btn btn--delete" on:click=on_confirm_delete>
                                "Eliminar"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}

#[component]
fn ProductCard<FA, FT>(
    product: Product,
    pending: RwSignal<HashSet<VariantKey>>,
    on_adjust: FA,
    on_toggle: FT,
    pending_delete: RwSignal<Option<Product>>,
) -> impl IntoView
where
    FA: Fn(String, String, i32) + Copy + 'static,
    FT: Fn(Product) + Copy + 'static,
{
    let navigate = use_navigate();
    let name = product.name.clone();
    let image_url = product.image.as_ref().map(|img| img.url.clone());
    let is_active = product.is_active;
    let out_of_stock = product.is_out_of_stock();
    let low_stock = product.is_low_stock();
    let edit_path = format!("/edit-product/{}", product.id);
    let for_toggle = product.clone();
    let for_delete = product.clone();

    let variants = product
        .variants
        .iter()
        .map(|variant| {
            let product_id = product.id.clone();
            let color_id = variant.color.id().to_string();
            let key = (product_id.clone(), color_id.clone());
            let amount = variant.amount;
            let dec_disabled = {
                let key = key.clone();
                move || !is_active || amount == 0 || pending.get().contains(&key)
            };
            let inc_disabled = move || !is_active || pending.get().contains(&key);
            let dec = {
                let product_id = product_id.clone();
                let color_id = color_id.clone();
                move |_| on_adjust(product_id.clone(), color_id.clone(), -1)
            };
            let inc = move |_| on_adjust(product_id.clone(), color_id.clone(), 1);
            view! {
                <div class="variant-row">
                    <span class="variant-row__color">{variant.color.display_name().to_string()}</span>
                    <span class="variant-row__price">{format_money(variant.price_sell)}</span>
                    <div class="variant-row__stock">
                        <button class="btn btn--stock" disabled=dec_disabled on:click=dec>
                            {icon("minus")}
                        </button>
                        <span class="variant-row__amount">{amount}</span>
                        <button class="btn btn--stock" disabled=inc_disabled on:click=inc>
                            {icon("plus")}
                        </button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=if is_active { "card card--product" } else { "card card--product card--inactive" }>
            <div class="card__header">
                {image_url.map(|url| view! {
                    <img class="card__image" src=url alt="" />
                })}
                <span class="card__name">{name}</span>
                {out_of_stock.then(|| view! {
                    <span class="badge badge--out">{icon("alert")}" Sin stock"</span>
                })}
                {low_stock.then(|| view! {
                    <span class="badge badge--low">{icon("alert")}" Stock bajo"</span>
                })}
            </div>
            <div class="card__variants">{variants}</div>
            <div class="card__footer">
                <span class="card__total">"Total: " {product.total_stock()} " u."</span>
                <div class="card__actions">
                    <button
                        class="btn btn--edit"
                        on:click=move |_| navigate(&edit_path, Default::default())
                    >
                        "Editar"
                    </button>
                    <button
                        class="btn btn--toggle"
                        title=if is_active { "Pausar" } else { "Activar" }
                        on:click=move |_| on_toggle(for_toggle.clone())
                    >
                        {icon("power")}
                    </button>
                    <button
                        class="btn btn--delete"
                        on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                    >
                        {icon("trash")}
                    </button>
                </div>
            </div>
        </div>
    }
}
