//! Two-phase optimistic stock adjustment for the inventory view.
//!
//! The ±1 stock buttons mutate the local snapshot first (`apply_delta`), then
//! either replace the product with the server's authoritative copy
//! (`reconcile`) or roll the optimistic change back (`revert_delta`) when the
//! PATCH fails. Keeping the three steps as plain functions over the snapshot
//! makes the flow testable without any UI.

use thiserror::Error;

use crate::domain::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("producto desconocido: {0}")]
    UnknownProduct(String),
    #[error("el producto no tiene una variante con ese color")]
    UnknownVariant,
    #[error("el producto está pausado")]
    InactiveProduct,
    #[error("el stock no puede ser negativo")]
    Underflow,
}

fn find_amount<'a>(
    products: &'a mut [Product],
    product_id: &str,
    color_id: &str,
) -> Result<&'a mut u32, StockError> {
    let product = products
        .iter_mut()
        .find(|p| p.id == product_id)
        .ok_or_else(|| StockError::UnknownProduct(product_id.to_string()))?;
    if !product.is_active {
        return Err(StockError::InactiveProduct);
    }
    product
        .variants
        .iter_mut()
        .find(|v| v.color.id() == color_id)
        .map(|v| &mut v.amount)
        .ok_or(StockError::UnknownVariant)
}

/// Optimistic phase: apply ±delta to the variant identified by its color.
/// Leaves the snapshot untouched on any rejection.
pub fn apply_delta(
    products: &mut [Product],
    product_id: &str,
    color_id: &str,
    delta: i32,
) -> Result<(), StockError> {
    let amount = find_amount(products, product_id, color_id)?;
    let next = *amount as i64 + delta as i64;
    if next < 0 {
        return Err(StockError::Underflow);
    }
    *amount = next as u32;
    Ok(())
}

/// Roll back a previously applied delta after a failed request. Saturates
/// instead of erroring: the snapshot must end up usable even if the server
/// raced us in between.
pub fn revert_delta(products: &mut [Product], product_id: &str, color_id: &str, delta: i32) {
    if let Ok(amount) = find_amount(products, product_id, color_id) {
        let restored = (*amount as i64 - delta as i64).max(0);
        *amount = restored as u32;
    }
}

/// Replace the local product with the server's authoritative copy.
/// Returns false when the product is no longer in the snapshot.
pub fn reconcile(products: &mut [Product], authoritative: Product) -> bool {
    match products.iter_mut().find(|p| p.id == authoritative.id) {
        Some(slot) => {
            *slot = authoritative;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{CategoryRef, ColorRef, ColorVariant};

    fn snapshot() -> Vec<Product> {
        vec![Product {
            id: "p1".into(),
            name: "Funda".into(),
            category: CategoryRef::Id("c1".into()),
            variants: vec![ColorVariant {
                id: Some("v1".into()),
                color: ColorRef::Id("col1".into()),
                amount: 2,
                price_cost: 10.0,
                price_sell: 25.0,
            }],
            min_stock_alert: 5,
            is_active: true,
            image: None,
            total_profit: None,
        }]
    }

    #[test]
    fn apply_and_revert_restore_the_snapshot() {
        let mut products = snapshot();
        let before = products.clone();

        apply_delta(&mut products, "p1", "col1", 1).unwrap();
        assert_eq!(products[0].variants[0].amount, 3);

        revert_delta(&mut products, "p1", "col1", 1);
        assert_eq!(products, before);
    }

    #[test]
    fn underflow_is_rejected_without_mutation() {
        let mut products = snapshot();
        apply_delta(&mut products, "p1", "col1", -1).unwrap();
        apply_delta(&mut products, "p1", "col1", -1).unwrap();
        assert_eq!(products[0].variants[0].amount, 0);

        let err = apply_delta(&mut products, "p1", "col1", -1).unwrap_err();
        assert_eq!(err, StockError::Underflow);
        assert_eq!(products[0].variants[0].amount, 0);
    }

    #[test]
    fn inactive_product_rejects_adjustment() {
        let mut products = snapshot();
        products[0].is_active = false;
        assert_eq!(
            apply_delta(&mut products, "p1", "col1", 1),
            Err(StockError::InactiveProduct)
        );
    }

    #[test]
    fn unknown_targets() {
        let mut products = snapshot();
        assert!(matches!(
            apply_delta(&mut products, "ghost", "col1", 1),
            Err(StockError::UnknownProduct(_))
        ));
        assert_eq!(
            apply_delta(&mut products, "p1", "ghost", 1),
            Err(StockError::UnknownVariant)
        );
    }

    #[test]
    fn reconcile_prefers_server_state() {
        let mut products = snapshot();
        apply_delta(&mut products, "p1", "col1", 1).unwrap();

        // Server answered with a different amount (another session sold one).
        let mut server = snapshot().remove(0);
        server.variants[0].amount = 1;
        assert!(reconcile(&mut products, server));
        assert_eq!(products[0].variants[0].amount, 1);

        let unknown = Product {
            id: "ghost".into(),
            ..snapshot().remove(0)
        };
        assert!(!reconcile(&mut products, unknown));
    }
}
