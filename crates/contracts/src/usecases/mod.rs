pub mod adjust_stock;
pub mod create_sale;
