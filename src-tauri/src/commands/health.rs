use serde::Serialize;
use tauri::AppHandle;
use tracing::{info, warn};

use crate::config::{read_secret, StoreSettings, STORE_API_KEY_SERVICE};
use crate::error::StorefrontError;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub catalog_source: String,
    pub store_url_set: bool,
    pub store_api_key_set: bool,
    pub catalog_reachable: bool,
    pub product_count: Option<usize>,
    pub catalog_error: Option<String>,
}

#[tauri::command]
pub async fn run_health_check(app: AppHandle) -> Result<HealthReport, String> {
    info!("Running health check");
    let settings = StoreSettings::load(&app)?;
    let key_read = read_secret(STORE_API_KEY_SERVICE);
    if let Err(e) = &key_read {
        warn!("Keychain read failed: {}", e);
    }
    let report = check_catalog(&settings, key_read).await;
    info!(
        "Catalog source: {}, reachable: {}, products: {:?}",
        report.catalog_source, report.catalog_reachable, report.product_count
    );
    Ok(report)
}

/// Keychain and catalog failures land in `catalog_error`; the report itself
/// is always produced.
async fn check_catalog(
    settings: &StoreSettings,
    key_read: Result<Option<String>, StorefrontError>,
) -> HealthReport {
    let store_url_set = settings.store_url.is_some();
    let store_api_key_set = matches!(key_read, Ok(Some(_)));
    let catalog_source = if store_url_set { "hosted" } else { "local" }.to_string();

    let listed = match settings.catalog_with(|_| key_read) {
        Ok(catalog) => catalog.list_products().await,
        Err(e) => Err(e),
    };
    let (catalog_reachable, product_count, catalog_error) = match listed {
        Ok(products) => (true, Some(products.len()), None),
        Err(e) => {
            warn!("Catalog check failed: {}", e);
            (false, None, Some(e.to_string()))
        }
    };

    HealthReport {
        catalog_source,
        store_url_set,
        store_api_key_set,
        catalog_reachable,
        product_count,
        catalog_error,
    }
}
