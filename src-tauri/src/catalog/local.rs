use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{info, warn};

use super::seed;
use super::types::{CustomizationRules, CustomizationType, Product};

const PRODUCT_COLUMNS: &str = "id, barcode, name, description, price, image_filename,
     customization_type, customization_rules, active, created_at, updated_at";

/// SQLite product catalog used when no hosted store is configured.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
pub struct LocalCatalog {
    conn: Connection,
}

impl LocalCatalog {
    /// Open or create the catalog database. Does not seed.
    pub fn new(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data dir: {}", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| format!("Failed to open catalog database at {:?}: {}", db_path, e))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                barcode TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT,
                price REAL NOT NULL,
                image_filename TEXT,
                customization_type TEXT NOT NULL DEFAULT 'none',
                customization_rules TEXT,
                active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_products_created ON products(created_at DESC);",
        )
        .map_err(|e| format!("Failed to create products table: {}", e))?;

        Ok(Self { conn })
    }

    /// Open the catalog and load the embedded seed products if it is empty.
    pub fn open_seeded(db_path: &Path) -> Result<Self, String> {
        let catalog = Self::new(db_path)?;
        if catalog.count()? == 0 {
            let products = seed::default_seed().map_err(|e| format!("{:#}", e))?;
            catalog.insert_all(&products)?;
            info!("Seeded local catalog with {} products", products.len());
        }
        Ok(catalog)
    }

    pub fn count(&self) -> Result<usize, String> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
            .map_err(|e| format!("Failed to count products: {}", e))?;
        Ok(count as usize)
    }

    /// Insert or replace products by id.
    pub fn insert_all(&self, products: &[Product]) -> Result<(), String> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "INSERT OR REPLACE INTO products ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                PRODUCT_COLUMNS
            ))
            .map_err(|e| format!("Failed to prepare insert: {}", e))?;

        for product in products {
            let rules_json = product
                .customization_rules
                .as_ref()
                .map(serde_json::to_string)
                .transpose()
                .map_err(|e| format!("Failed to serialize rules for {}: {}", product.id, e))?;

            stmt.execute(params![
                product.id,
                product.barcode,
                product.name,
                product.description,
                product.price,
                product.image_filename,
                product.customization_type.as_str(),
                rules_json,
                product.active,
                product.created_at,
                product.updated_at,
            ])
            .map_err(|e| format!("Failed to insert product {}: {}", product.id, e))?;
        }
        Ok(())
    }

    /// Active products, newest first.
    pub fn list_active(&self) -> Result<Vec<Product>, String> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM products WHERE active = 1 ORDER BY created_at DESC",
                PRODUCT_COLUMNS
            ))
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map([], product_from_row)
            .map_err(|e| format!("Failed to query products: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect products: {}", e))
    }

    pub fn get(&self, id: &str) -> Result<Option<Product>, String> {
        self.find_active("id", id)
    }

    pub fn get_by_barcode(&self, barcode: &str) -> Result<Option<Product>, String> {
        self.find_active("barcode", barcode)
    }

    fn find_active(&self, column: &str, value: &str) -> Result<Option<Product>, String> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM products WHERE {} = ?1 AND active = 1",
                    PRODUCT_COLUMNS, column
                ),
                params![value],
                product_from_row,
            )
            .optional()
            .map_err(|e| format!("Product lookup failed: {}", e))
    }
}

fn product_from_row(row: &Row) -> rusqlite::Result<Product> {
    let id: String = row.get(0)?;
    let kind: String = row.get(6)?;
    let rules_json: Option<String> = row.get(7)?;

    let customization_rules = rules_json.and_then(|json| match serde_json::from_str(&json) {
        Ok(value) => CustomizationRules::from_value(value),
        Err(e) => {
            warn!("Ignoring unreadable rules for product {}: {}", id, e);
            None
        }
    });

    Ok(Product {
        barcode: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        price: row.get(4)?,
        image_filename: row.get(5)?,
        customization_type: CustomizationType::parse(&kind),
        customization_rules,
        active: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_catalog() -> (LocalCatalog, TempDir) {
        let dir = TempDir::new().unwrap();
        let catalog = LocalCatalog::new(&dir.path().join("catalog.db")).unwrap();
        (catalog, dir)
    }

    fn product(id: &str, barcode: &str, created_at: &str) -> Product {
        Product {
            id: id.to_string(),
            barcode: barcode.to_string(),
            name: format!("Product {}", id),
            description: None,
            price: 10.0,
            image_filename: None,
            customization_type: CustomizationType::None,
            customization_rules: None,
            active: true,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_list_active_newest_first() {
        let (catalog, _dir) = create_test_catalog();
        let mut hidden = product("c", "BC-C", "2025-03-01T00:00:00Z");
        hidden.active = false;
        catalog
            .insert_all(&[
                product("a", "BC-A", "2025-01-01T00:00:00Z"),
                product("b", "BC-B", "2025-02-01T00:00:00Z"),
                hidden,
            ])
            .unwrap();

        let ids: Vec<String> = catalog
            .list_active()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_inactive_product_not_found() {
        let (catalog, _dir) = create_test_catalog();
        let mut p = product("a", "BC-A", "2025-01-01T00:00:00Z");
        p.active = false;
        catalog.insert_all(&[p]).unwrap();

        assert!(catalog.get("a").unwrap().is_none());
        assert!(catalog.get_by_barcode("BC-A").unwrap().is_none());
        assert_eq!(catalog.count().unwrap(), 1);
    }

    #[test]
    fn test_rules_round_trip_through_json_column() {
        let (catalog, _dir) = create_test_catalog();
        let mut p = product("a", "BC-A", "2025-01-01T00:00:00Z");
        p.customization_type = CustomizationType::Names;
        p.customization_rules = Some(CustomizationRules {
            max_names: Some(3),
            placeholder: Some("Pet name".to_string()),
            ..Default::default()
        });
        catalog.insert_all(&[p.clone()]).unwrap();

        assert_eq!(catalog.get_by_barcode("BC-A").unwrap(), Some(p));
    }

    #[test]
    fn test_unreadable_rules_column_reads_as_missing() {
        let (catalog, _dir) = create_test_catalog();
        catalog
            .insert_all(&[product("a", "BC-A", "2025-01-01T00:00:00Z")])
            .unwrap();
        catalog
            .conn
            .execute(
                "UPDATE products SET customization_type = 'text', customization_rules = '{not json' WHERE id = 'a'",
                [],
            )
            .unwrap();

        let p = catalog.get("a").unwrap().unwrap();
        assert_eq!(p.customization_type, CustomizationType::Text);
        assert!(p.customization_rules.is_none());
    }

    #[test]
    fn test_open_seeded_only_seeds_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.db");

        let catalog = LocalCatalog::open_seeded(&path).unwrap();
        let seeded = catalog.count().unwrap();
        assert!(seeded > 0);
        catalog
            .insert_all(&[product("extra", "BC-X", "2025-01-01T00:00:00Z")])
            .unwrap();
        drop(catalog);

        let reopened = LocalCatalog::open_seeded(&path).unwrap();
        assert_eq!(reopened.count().unwrap(), seeded + 1);
    }
}
