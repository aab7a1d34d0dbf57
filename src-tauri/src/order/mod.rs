//! Order intake: validate a request against the product, assign an order
//! number, and log it as pending. Payment is not taken here.

pub mod log;
pub mod number;
pub mod types;
pub mod validation;

pub use log::OrderLog;
pub use number::new_order_number;
pub use types::{
    CustomerInfo, CustomizationPayload, OrderReceipt, OrderRecord, OrderRequest, OrderStatus,
    PaymentStatus,
};
pub use validation::{validate_order, ValidationIssue};

use crate::catalog::{Limits, Product};
use crate::error::StorefrontError;

pub const PAYMENT_PENDING_MESSAGE: &str =
    "Order received. Online payment is coming soon.";

/// Validate `request` against `product`, then log it as a pending order.
/// Nothing is written when validation fails.
pub fn place_order(
    log: &OrderLog,
    product: &Product,
    request: &OrderRequest,
) -> Result<OrderReceipt, StorefrontError> {
    let issues = validate_order(product, request);
    if !issues.is_empty() {
        return Err(StorefrontError::Validation(issues));
    }

    let customization = match product.limits() {
        Limits::None => None,
        _ => request.customization.as_ref(),
    };

    let record = log
        .record_pending(
            &new_order_number(),
            &product.id,
            &request.customer,
            customization,
            product.price,
        )
        .map_err(StorefrontError::Store)?;

    Ok(OrderReceipt {
        order_number: record.order_number,
        product_name: product.name.clone(),
        total_price: record.total_price,
        status: record.status,
        payment_available: false,
        message: PAYMENT_PENDING_MESSAGE.to_string(),
    })
}
