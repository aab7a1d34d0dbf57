use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, Row};
use tracing::info;

use super::types::{CustomerInfo, CustomizationPayload, OrderRecord, OrderStatus};

/// SQLite log of orders taken at the counter.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
pub struct OrderLog {
    conn: Connection,
}

impl OrderLog {
    pub fn new(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data dir: {}", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| format!("Failed to open order log at {:?}: {}", db_path, e))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS orders (
                order_number TEXT PRIMARY KEY,
                product_id TEXT NOT NULL,
                customer_name TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                customization_json TEXT,
                status TEXT NOT NULL DEFAULT 'pending',
                total_price REAL NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_orders_created ON orders(created_at DESC);",
        )
        .map_err(|e| format!("Failed to create orders table: {}", e))?;

        Ok(Self { conn })
    }

    /// Store a new pending order and return the stored row.
    pub fn record_pending(
        &self,
        order_number: &str,
        product_id: &str,
        customer: &CustomerInfo,
        customization: Option<&CustomizationPayload>,
        total_price: f64,
    ) -> Result<OrderRecord, String> {
        let customization_json = customization
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| format!("Failed to serialize customization: {}", e))?;
        let created_at = Utc::now().to_rfc3339();

        self.conn
            .execute(
                "INSERT INTO orders
                 (order_number, product_id, customer_name, customer_email, customer_phone,
                  customization_json, status, total_price, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    order_number,
                    product_id,
                    customer.name.trim(),
                    customer.email.trim(),
                    customer.phone,
                    customization_json,
                    OrderStatus::Pending.as_str(),
                    total_price,
                    created_at,
                ],
            )
            .map_err(|e| format!("Failed to record order {}: {}", order_number, e))?;

        info!("Recorded pending order {} for product {}", order_number, product_id);
        Ok(OrderRecord {
            order_number: order_number.to_string(),
            product_id: product_id.to_string(),
            customer: CustomerInfo {
                name: customer.name.trim().to_string(),
                email: customer.email.trim().to_string(),
                phone: customer.phone.clone(),
            },
            customization: customization.cloned(),
            status: OrderStatus::Pending,
            payment_status: None,
            total_price,
            created_at,
        })
    }

    /// Most recent orders first.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<OrderRecord>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT order_number, product_id, customer_name, customer_email, customer_phone,
                        customization_json, status, total_price, created_at
                 FROM orders
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT ?1",
            )
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map(params![limit as i64], record_from_row)
            .map_err(|e| format!("Failed to query orders: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect orders: {}", e))
    }
}

fn record_from_row(row: &Row) -> rusqlite::Result<OrderRecord> {
    let customization_json: Option<String> = row.get(5)?;
    let status: String = row.get(6)?;

    Ok(OrderRecord {
        order_number: row.get(0)?,
        product_id: row.get(1)?,
        customer: CustomerInfo {
            name: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
        },
        customization: customization_json.and_then(|json| serde_json::from_str(&json).ok()),
        status: OrderStatus::parse(&status).unwrap_or_default(),
        payment_status: None,
        total_price: row.get(7)?,
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_log() -> (OrderLog, TempDir) {
        let dir = TempDir::new().unwrap();
        let log = OrderLog::new(&dir.path().join("orders.db")).unwrap();
        (log, dir)
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "  Dana Reyes ".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(619) 555-1234".to_string(),
        }
    }

    #[test]
    fn test_record_and_list() {
        let (log, _dir) = create_test_log();
        let payload = CustomizationPayload::Names {
            names: vec!["Ana".to_string(), "Bo".to_string()],
            font: "Great Vibes".to_string(),
        };

        let record = log
            .record_pending("RD-20250101-AAAAAA", "p1", &customer(), Some(&payload), 24.99)
            .unwrap();
        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(record.customer.name, "Dana Reyes");

        let listed = log.list_recent(10).unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[test]
    fn test_list_recent_limit_and_order() {
        let (log, _dir) = create_test_log();
        for n in ["RD-20250101-AAAAA1", "RD-20250101-AAAAA2", "RD-20250101-AAAAA3"] {
            log.record_pending(n, "p1", &customer(), None, 10.0).unwrap();
        }

        let listed = log.list_recent(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].order_number, "RD-20250101-AAAAA3");
        assert!(listed.iter().all(|r| r.customization.is_none()));
    }

    #[test]
    fn test_duplicate_order_number_rejected() {
        let (log, _dir) = create_test_log();
        log.record_pending("RD-20250101-AAAAAA", "p1", &customer(), None, 10.0)
            .unwrap();
        let err = log
            .record_pending("RD-20250101-AAAAAA", "p2", &customer(), None, 10.0)
            .unwrap_err();
        assert!(err.contains("Failed to record order"));
    }
}
