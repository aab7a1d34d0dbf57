//! Tauri commands for browsing the product catalog.

use tauri::AppHandle;
use tracing::info;

use crate::catalog::Product;
use crate::config::StoreSettings;

/// Active products, newest first.
#[tauri::command]
pub async fn list_products(app: AppHandle) -> Result<Vec<Product>, String> {
    let catalog = StoreSettings::load(&app)?.catalog()?;
    let products = catalog.list_products().await?;
    info!(
        "Listed {} products from {} catalog",
        products.len(),
        catalog.source_name()
    );
    Ok(products)
}

#[tauri::command]
pub async fn get_product(app: AppHandle, product_id: String) -> Result<Product, String> {
    info!("Getting product: {}", product_id);
    let catalog = StoreSettings::load(&app)?.catalog()?;
    Ok(catalog.get_product(&product_id).await?)
}

#[tauri::command]
pub async fn get_product_by_barcode(app: AppHandle, barcode: String) -> Result<Product, String> {
    info!("Getting product by barcode: {}", barcode);
    let catalog = StoreSettings::load(&app)?.catalog()?;
    Ok(catalog.get_product_by_barcode(&barcode).await?)
}
