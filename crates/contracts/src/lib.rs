//! Shared contracts for the Nextzone inventory & point-of-sale frontend.
//!
//! Wire types exchanged with the backend API, client-side validation, and the
//! pure sale-composition / stock-adjustment logic used by the UI.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
