//! Tauri commands for order intake.

use tauri::AppHandle;
use tracing::{info, warn};

use crate::config::StoreSettings;
use crate::error::StorefrontError;
use crate::order::{self, OrderLog, OrderReceipt, OrderRecord, OrderRequest};

/// Validate and record a pending pickup order.
///
/// Validation failures come back as one message per issue, joined by "; ".
#[tauri::command]
pub async fn submit_order(app: AppHandle, request: OrderRequest) -> Result<OrderReceipt, String> {
    info!("Submitting order for product: {}", request.product_id);
    let settings = StoreSettings::load(&app)?;
    let product = settings
        .catalog()?
        .get_product(&request.product_id)
        .await?;

    let db_path = settings.orders_db();
    let receipt = tokio::task::spawn_blocking(move || {
        let log = OrderLog::new(&db_path).map_err(StorefrontError::Store)?;
        order::place_order(&log, &product, &request)
    })
    .await
    .map_err(|e| format!("Order task panicked: {}", e))?
    .map_err(|e| {
        warn!("Order rejected: {}", e);
        e
    })?;

    info!("Order {} recorded as pending", receipt.order_number);
    Ok(receipt)
}

/// Most recent orders first.
#[tauri::command]
pub async fn list_recent_orders(app: AppHandle, limit: Option<usize>) -> Result<Vec<OrderRecord>, String> {
    let db_path = StoreSettings::load(&app)?.orders_db();
    let limit = limit.unwrap_or(50);
    tokio::task::spawn_blocking(move || OrderLog::new(&db_path)?.list_recent(limit))
        .await
        .map_err(|e| format!("Order task panicked: {}", e))?
}
