use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::{ColorVariant, Product};
use crate::domain::sale::{SaleRequest, SaleRequestItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Incrementing past the stock known at composition time. Non-fatal: the
    /// cart is left unchanged and the UI shows a transient message.
    #[error("sin stock suficiente ({ceiling} disponibles)")]
    InsufficientStock { variant_id: String, ceiling: u32 },
    #[error("el carrito está vacío")]
    Empty,
}

/// Read-only view of a sellable variant, narrowed from the catalog snapshot
/// at the ingestion boundary. `available_stock` is the authoritative ceiling
/// for this composition session; it may be stale relative to concurrent
/// sales in other sessions, in which case the backend rejects the submit.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOffer {
    pub product_id: String,
    pub variant_id: String,
    pub display_name: String,
    pub unit_price: f64,
    pub available_stock: u32,
}

impl VariantOffer {
    /// `None` for variants the backend has not persisted yet (no id).
    pub fn from_catalog(product: &Product, variant: &ColorVariant) -> Option<Self> {
        let variant_id = variant.id.clone()?;
        Some(Self {
            product_id: product.id.clone(),
            variant_id,
            display_name: format!("{} ({})", product.name, variant.color.display_name()),
            unit_price: variant.price_sell,
            available_stock: variant.amount,
        })
    }
}

/// One product-variant entry in the cart.
///
/// Invariant: `1 <= quantity <= stock_ceiling`. A line never reaches
/// quantity 0; decrementing at 1 removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub variant_id: String,
    pub display_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub stock_ceiling: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// The in-progress, unsubmitted composition of a sale. One per screen
/// instance; created empty on mount, reset after a successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    comment: String,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Add a variant to the cart, or bump its quantity if already present.
    /// At most one line exists per variant id. Rejected without mutating the
    /// cart when the line already sits at the stock ceiling (or the offer has
    /// no stock at all).
    pub fn add_or_increment(&mut self, offer: &VariantOffer) -> Result<(), CartError> {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.variant_id == offer.variant_id)
        {
            if line.quantity >= line.stock_ceiling {
                return Err(CartError::InsufficientStock {
                    variant_id: offer.variant_id.clone(),
                    ceiling: line.stock_ceiling,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if offer.available_stock == 0 {
            return Err(CartError::InsufficientStock {
                variant_id: offer.variant_id.clone(),
                ceiling: 0,
            });
        }

        self.lines.push(CartLine {
            product_id: offer.product_id.clone(),
            variant_id: offer.variant_id.clone(),
            display_name: offer.display_name.clone(),
            quantity: 1,
            unit_price: offer.unit_price,
            stock_ceiling: offer.available_stock,
        });
        Ok(())
    }

    /// Lower a line's quantity by one, removing the line at quantity 1.
    /// No-op when the variant is not in the cart.
    pub fn decrement(&mut self, variant_id: &str) {
        if let Some(idx) = self.lines.iter().position(|l| l.variant_id == variant_id) {
            if self.lines[idx].quantity > 1 {
                self.lines[idx].quantity -= 1;
            } else {
                self.lines.remove(idx);
            }
        }
    }

    /// Recomputed from the lines on every call; never cached.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.comment.clear();
    }

    /// Project the cart into a sale-creation payload, stripping price fields.
    pub fn to_request(&self) -> Result<SaleRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(SaleRequest {
            items: self
                .lines
                .iter()
                .map(|l| SaleRequestItem {
                    product_id: l.product_id.clone(),
                    variant_id: l.variant_id.clone(),
                    quantity: l.quantity,
                })
                .collect(),
            comment: self.comment.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product::{CategoryRef, ColorRef};

    fn offer(variant_id: &str, price: f64, stock: u32) -> VariantOffer {
        VariantOffer {
            product_id: "p1".into(),
            variant_id: variant_id.into(),
            display_name: format!("Funda ({variant_id})"),
            unit_price: price,
            available_stock: stock,
        }
    }

    #[test]
    fn quantity_never_exceeds_ceiling() {
        let mut cart = Cart::new();
        let v = offer("v1", 10.0, 3);

        for _ in 0..3 {
            cart.add_or_increment(&v).unwrap();
        }
        assert_eq!(cart.lines()[0].quantity, 3);

        // The (N+1)-th attempt is rejected and leaves the cart unchanged.
        let err = cart.add_or_increment(&v).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                variant_id: "v1".into(),
                ceiling: 3
            }
        );
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn stock_boundary_of_one() {
        let mut cart = Cart::new();
        let v = offer("v1", 10.0, 1);

        cart.add_or_increment(&v).unwrap();
        assert_eq!(cart.lines()[0].quantity, 1);

        assert!(cart.add_or_increment(&v).is_err());
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn zero_stock_offer_is_rejected_outright() {
        let mut cart = Cart::new();
        assert!(cart.add_or_increment(&offer("v1", 10.0, 0)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_removes_line_at_one() {
        let mut cart = Cart::new();
        let v = offer("v1", 10.0, 5);
        cart.add_or_increment(&v).unwrap();
        cart.add_or_increment(&v).unwrap();

        cart.decrement("v1");
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.decrement("v1");
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_of_absent_variant_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_or_increment(&offer("v1", 10.0, 5)).unwrap();
        let before = cart.clone();

        cart.decrement("ghost");
        assert_eq!(cart, before);
    }

    #[test]
    fn at_most_one_line_per_variant() {
        let mut cart = Cart::new();
        let v1 = offer("v1", 10.0, 5);
        let v2 = offer("v2", 25.0, 5);

        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v2).unwrap();
        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v1).unwrap();

        assert_eq!(cart.lines().len(), 2);
        let line = cart.lines().iter().find(|l| l.variant_id == "v1").unwrap();
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn total_is_recomputed_from_lines() {
        let mut cart = Cart::new();
        let v1 = offer("v1", 10.0, 5);
        let v2 = offer("v2", 25.0, 5);

        assert_eq!(cart.total(), 0.0);

        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v2).unwrap();
        assert_eq!(cart.total(), 45.0);

        cart.decrement("v1");
        assert_eq!(cart.total(), 35.0);

        cart.clear();
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn request_projection_strips_prices() {
        let mut cart = Cart::new();
        let v1 = offer("v1", 10.0, 5);
        let v2 = offer("v2", 25.0, 5);
        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v1).unwrap();
        cart.add_or_increment(&v2).unwrap();
        cart.set_comment("efectivo");

        let req = cart.to_request().unwrap();
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].variant_id, "v1");
        assert_eq!(req.items[0].quantity, 2);
        assert_eq!(req.items[1].variant_id, "v2");
        assert_eq!(req.items[1].quantity, 1);
        assert_eq!(req.comment, "efectivo");

        // Post-submission reset.
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.comment(), "");
    }

    #[test]
    fn empty_cart_produces_no_request() {
        let cart = Cart::new();
        assert_eq!(cart.to_request().unwrap_err(), CartError::Empty);
    }

    #[test]
    fn offer_from_catalog_uses_color_name() {
        let product = Product {
            id: "p1".into(),
            name: "Funda iPhone 15".into(),
            category: CategoryRef::Expanded(Category {
                id: "c1".into(),
                name: "Fundas".into(),
                is_active: true,
            }),
            variants: vec![
                ColorVariant {
                    id: Some("v1".into()),
                    color: ColorRef::Expanded(crate::domain::color::Color {
                        id: "col1".into(),
                        name: "Negro".into(),
                        hex: "#000000".into(),
                        is_active: true,
                    }),
                    amount: 4,
                    price_cost: 10.0,
                    price_sell: 25.0,
                },
                // Not yet persisted: no offer can be built.
                ColorVariant {
                    id: None,
                    color: ColorRef::Id("col2".into()),
                    amount: 1,
                    price_cost: 10.0,
                    price_sell: 25.0,
                },
            ],
            min_stock_alert: 5,
            is_active: true,
            image: None,
            total_profit: None,
        };

        let offer = VariantOffer::from_catalog(&product, &product.variants[0]).unwrap();
        assert_eq!(offer.display_name, "Funda iPhone 15 (Negro)");
        assert_eq!(offer.unit_price, 25.0);
        assert_eq!(offer.available_stock, 4);

        assert!(VariantOffer::from_catalog(&product, &product.variants[1]).is_none());
    }
}
