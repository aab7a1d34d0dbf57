use std::path::PathBuf;

use keyring::Entry;
use tauri::{AppHandle, Manager};
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::catalog::{Catalog, HostedCatalog};
use crate::error::StorefrontError;

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const STORE_URL_KEY: &str = "store_url";
pub const STORE_API_KEY_SERVICE: &str = "storefront-store-api";
pub const KEYCHAIN_USER: &str = "storefront";

const CATALOG_DB: &str = "catalog.db";
const ORDERS_DB: &str = "orders.db";

/// Where products come from and where orders are written.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub store_url: Option<String>,
    pub data_dir: PathBuf,
}

impl StoreSettings {
    pub fn load(app: &AppHandle) -> Result<Self, StorefrontError> {
        let store = app
            .store(PREFERENCES_FILE)
            .map_err(|e| StorefrontError::Config(format!("Failed to open store: {}", e)))?;
        let store_url = store
            .get(STORE_URL_KEY)
            .and_then(|v| v.as_str().map(|s| s.trim().to_string()))
            .filter(|s| !s.is_empty());

        let data_dir = app
            .path()
            .app_data_dir()
            .map_err(|e| StorefrontError::Config(format!("Failed to get data dir: {}", e)))?;

        Ok(Self {
            store_url,
            data_dir,
        })
    }

    /// Hosted when a store URL is set, local otherwise. The keychain is
    /// only consulted for the hosted source.
    pub fn catalog(&self) -> Result<Catalog, StorefrontError> {
        self.catalog_with(read_secret)
    }

    pub fn catalog_with<F>(&self, read_key: F) -> Result<Catalog, StorefrontError>
    where
        F: FnOnce(&str) -> Result<Option<String>, StorefrontError>,
    {
        let Some(url) = &self.store_url else {
            return Ok(Catalog::Local {
                db_path: self.data_dir.join(CATALOG_DB),
            });
        };
        match read_key(STORE_API_KEY_SERVICE)? {
            Some(key) => HostedCatalog::new(url, &key)
                .map(Catalog::Hosted)
                .map_err(StorefrontError::Config),
            None => Err(StorefrontError::Config(
                "Store URL is set but no store API key is saved".to_string(),
            )),
        }
    }

    pub fn orders_db(&self) -> PathBuf {
        self.data_dir.join(ORDERS_DB)
    }
}

pub fn keychain_entry(service: &str) -> Result<Entry, StorefrontError> {
    Entry::new(service, KEYCHAIN_USER).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        StorefrontError::Keychain(e.to_string())
    })
}

/// The saved secret for `service`, or `None` when nothing is saved.
pub fn read_secret(service: &str) -> Result<Option<String>, StorefrontError> {
    match keychain_entry(service)?.get_password() {
        Ok(secret) => Ok(Some(secret)),
        Err(keyring::Error::NoEntry) => {
            info!("No secret found for service: {}", service);
            Ok(None)
        }
        Err(e) => {
            warn!("Failed to get password for {}: {}", service, e);
            Err(StorefrontError::Keychain(e.to_string()))
        }
    }
}
