//! Sale composition: catalog on one side, cart on the other.
//!
//! The cart itself lives in `contracts`; this screen only feeds it offers
//! and renders its state. Stock ceilings come from the catalog snapshot
//! taken on mount, so a submit can still be rejected by the backend when
//! another session sold the same stock first. The cart is kept intact in
//! that case.

use contracts::domain::product::Product;
use contracts::usecases::create_sale::{Cart, CartError, VariantOffer};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sale::api;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

#[component]
pub fn CreateSale(refresh: RwSignal<u32>) -> impl IntoView {
    let catalog = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let cart = RwSignal::new(Cart::new());
    let submitting = RwSignal::new(false);
    let flash = Flash::new();

    // Refetched after every recorded sale; the stock shown must match what
    // the backend just discounted.
    Effect::new(move |_| {
        refresh.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_active_catalog().await {
                Ok(list) => catalog.set(list),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    let filtered = move || {
        let term = search.get().to_lowercase();
        catalog
            .get()
            .into_iter()
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .collect::<Vec<_>>()
    };

    let add_offer = move |offer: VariantOffer| {
        if let Some(e) = add_to_cart(cart, submitting, &offer) {
            flash.error(e.to_string());
        }
    };

    let remove_one = move |variant_id: &str| remove_from_cart(cart, submitting, variant_id);

    let on_submit = move |_| {
        let request = match cart.get_untracked().to_request() {
            Ok(request) => request,
            Err(e) => {
                flash.error(e.to_string());
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match api::submit_sale(&request).await {
                Ok(()) => {
                    flash.success("Venta realizada con éxito");
                    cart.update(Cart::clear);
                    refresh.update(|n| *n += 1);
                }
                // The cart is preserved so the seller can retry or adjust.
                Err(e) => flash.error(e),
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="sale-create">
            <FlashMessages flash=flash />
            <div class="sale-create__catalog">
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
                    {move || filtered()
                        .into_iter()
                        .map(|product| {
                            let offers: Vec<(String, VariantOffer)> = product
                                .variants
                                .iter()
                                .filter_map(|v| {
                                    let offer = VariantOffer::from_catalog(&product, v)?;
                                    Some((v.color.display_name().to_string(), offer))
                                })
                                .collect();
                            view! {
                                <div class="sale-create__product">
                                    <span class="sale-create__product-name">
                                        {product.name.clone()}
                                    </span>
                                    <div class="sale-create__variants">
                                        {offers
                                            .into_iter()
                                            .map(|(color, offer)| {
                                                let sold_out = offer.available_stock == 0;
                                                let for_click = offer.clone();
                                                view! {
                                                    <button
                                                        class="variant-offer"
                                                        disabled=move || sold_out || submitting.get()
                                                        on:click=move |_| add_offer(for_click.clone())
                                                    >
                                                        <span class="variant-offer__color">{color}</span>
                                                        <span class="variant-offer__price">
                                                            {format_money(offer.unit_price)}
                                                        </span>
                                                        <span class="variant-offer__stock">
                                                            {offer.available_stock} " u."
                                                        </span>
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Show>
            </div>

            <div class="sale-create__cart">
                <h2>{icon("cart")} " Carrito"</h2>
                <Show
                    when=move || !cart.read().is_empty()
                    fallback=|| view! { <p class="sale-create__empty">"El carrito está vacío"</p> }
                >
                    {move || cart
                        .get()
                        .lines()
                        .iter()
                        .map(|line| {
                            let variant_id = line.variant_id.clone();
                            let reoffer = VariantOffer {
                                product_id: line.product_id.clone(),
                                variant_id: line.variant_id.clone(),
                                display_name: line.display_name.clone(),
                                unit_price: line.unit_price,
                                available_stock: line.stock_ceiling,
                            };
                            view! {
                                <div class="cart-line">
                                    <span class="cart-line__name">{line.display_name.clone()}</span>
                                    <div class="cart-line__qty">
                                        <button
                                            class="btn btn--stock"
                                            disabled=move || submitting.get()
                                            on:click=move |_| remove_one(&variant_id)
                                        >
                                            {icon("minus")}
                                        </button>
                                        <span>{line.quantity}</span>
                                        <button
                                            class="btn btn--stock"
                                            disabled=move || submitting.get()
                                            on:click=move |_| add_offer(reoffer.clone())
                                        >
                                            {icon("plus")}
                                        </button>
                                    </div>
                                    <span class="cart-line__subtotal">{format_money(line.subtotal())}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </Show>
                <textarea
                    placeholder="Comentario (opcional)"
                    prop:value=move || cart.read().comment().to_string()
                    disabled=move || submitting.get()
                    on:input=move |ev| edit_comment(cart, submitting, event_target_value(&ev))
                ></textarea>
                <div class="sale-create__footer">
                    <span class="sale-create__total">
                        "Total: " {move || format_money(cart.read().total())}
                    </span>
                    <button
                        class="btn btn--primary"
                        disabled=move || cart.read().is_empty() || submitting.get()
                        on:click=on_submit
                    >
                        {move || if submitting.get() { "Registrando..." } else { "Registrar venta" }}
                    </button>
                </div>
            </div>
        </section>
    }
}

// Every cart mutation funnels through these helpers. Invariant: while a
// submission is outstanding the cart is read-only, so no edit can slip in
// between the request snapshot and the success path's reset. The disabled
// attributes in the view mirror the same rule.

fn add_to_cart(
    cart: RwSignal<Cart>,
    submitting: RwSignal<bool>,
    offer: &VariantOffer,
) -> Option<CartError> {
    if submitting.get_untracked() {
        return None;
    }
    let mut rejection = None;
    cart.update(|c| {
        if let Err(e) = c.add_or_increment(offer) {
            rejection = Some(e);
        }
    });
    rejection
}

fn remove_from_cart(cart: RwSignal<Cart>, submitting: RwSignal<bool>, variant_id: &str) {
    if submitting.get_untracked() {
        return;
    }
    cart.update(|c| c.decrement(variant_id));
}

fn edit_comment(cart: RwSignal<Cart>, submitting: RwSignal<bool>, comment: String) {
    if submitting.get_untracked() {
        return;
    }
    cart.update(|c| c.set_comment(comment));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(variant_id: &str) -> VariantOffer {
        VariantOffer {
            product_id: "p1".into(),
            variant_id: variant_id.into(),
            display_name: format!("Funda ({variant_id})"),
            unit_price: 10.0,
            available_stock: 5,
        }
    }

    #[test]
    fn outstanding_submission_freezes_the_cart() {
        let cart = RwSignal::new(Cart::new());
        let submitting = RwSignal::new(false);

        assert!(add_to_cart(cart, submitting, &offer("v1")).is_none());
        edit_comment(cart, submitting, "efectivo".into());

        // Request goes out: from here until the response lands, no control
        // may change what was snapshotted.
        submitting.set(true);
        let snapshot = cart.get_untracked();

        assert!(add_to_cart(cart, submitting, &offer("v1")).is_none());
        assert!(add_to_cart(cart, submitting, &offer("v2")).is_none());
        remove_from_cart(cart, submitting, "v1");
        edit_comment(cart, submitting, "transferencia".into());
        assert_eq!(cart.get_untracked(), snapshot);

        // Response handled: the cart is editable again.
        submitting.set(false);
        remove_from_cart(cart, submitting, "v1");
        assert!(cart.get_untracked().is_empty());
    }

    #[test]
    fn engine_rejections_still_surface_when_idle() {
        let cart = RwSignal::new(Cart::new());
        let submitting = RwSignal::new(false);
        let one_left = VariantOffer {
            available_stock: 1,
            ..offer("v1")
        };

        assert!(add_to_cart(cart, submitting, &one_left).is_none());
        assert!(matches!(
            add_to_cart(cart, submitting, &one_left),
            Some(CartError::InsufficientStock { .. })
        ));
    }
}
