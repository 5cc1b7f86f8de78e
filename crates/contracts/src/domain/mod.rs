pub mod category;
pub mod color;
pub mod product;
pub mod sale;
