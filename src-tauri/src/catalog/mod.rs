//! Product catalog.
//!
//! Products come from one of two sources:
//! - `HostedCatalog`: the hosted store's query API, when a store URL is set
//! - `LocalCatalog`: a SQLite file in the app data dir, seeded on first open
//!
//! Only active products are ever returned.

pub mod hosted;
pub mod local;
pub mod seed;
pub mod types;

use std::path::PathBuf;

use crate::error::StorefrontError;

pub use hosted::HostedCatalog;
pub use local::LocalCatalog;
pub use types::{CustomizationRules, CustomizationType, Limits, Product};

pub enum Catalog {
    Hosted(HostedCatalog),
    Local { db_path: PathBuf },
}

impl Catalog {
    pub fn source_name(&self) -> &'static str {
        match self {
            Catalog::Hosted(_) => "hosted",
            Catalog::Local { .. } => "local",
        }
    }

    /// Active products, newest first.
    pub async fn list_products(&self) -> Result<Vec<Product>, StorefrontError> {
        let listed = match self {
            Catalog::Hosted(hosted) => hosted.list_active().await,
            Catalog::Local { db_path } => with_local(db_path.clone(), |c| c.list_active()).await,
        };
        listed.map_err(StorefrontError::Store)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, StorefrontError> {
        let found = match self {
            Catalog::Hosted(hosted) => hosted.get(id).await,
            Catalog::Local { db_path } => {
                let id = id.to_string();
                with_local(db_path.clone(), move |c| c.get(&id)).await
            }
        }
        .map_err(StorefrontError::Store)?;
        found.ok_or(StorefrontError::NotFound("Product"))
    }

    pub async fn get_product_by_barcode(&self, barcode: &str) -> Result<Product, StorefrontError> {
        let found = match self {
            Catalog::Hosted(hosted) => hosted.get_by_barcode(barcode).await,
            Catalog::Local { db_path } => {
                let barcode = barcode.to_string();
                with_local(db_path.clone(), move |c| c.get_by_barcode(&barcode)).await
            }
        }
        .map_err(StorefrontError::Store)?;
        found.ok_or(StorefrontError::NotFound("Product"))
    }
}

async fn with_local<T, F>(db_path: PathBuf, op: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&LocalCatalog) -> Result<T, String> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let catalog = LocalCatalog::open_seeded(&db_path)?;
        op(&catalog)
    })
    .await
    .map_err(|e| format!("Catalog task panicked: {}", e))?
}
