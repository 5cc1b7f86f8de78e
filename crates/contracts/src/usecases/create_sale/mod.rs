//! Sale composition: the in-memory cart behind the "Nueva Venta" screen.

mod cart;

pub use cart::{Cart, CartError, CartLine, VariantOffer};
