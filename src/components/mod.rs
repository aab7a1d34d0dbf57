pub mod header;
pub mod order_summary;
pub mod personalization_form;
pub mod pickup_notice;
pub mod product_card;
pub mod status_badge;
pub mod store_key_form;
