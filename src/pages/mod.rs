pub mod catalog;
pub mod health;
pub mod order;
pub mod orders;
pub mod product_detail;
pub mod settings;
