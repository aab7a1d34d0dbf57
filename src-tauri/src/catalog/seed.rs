//! Products for a fresh local catalog, embedded at compile time.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::Product;

/// Loaded from `src-tauri/config/seed_products.toml`.
const SEED_PRODUCTS: &str = include_str!("../../config/seed_products.toml");

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Parse a seed document.
pub fn parse_seed(content: &str) -> Result<Vec<Product>> {
    let file: SeedFile = toml::from_str(content).context("invalid product seed TOML")?;
    Ok(file.products)
}

/// The embedded seed products.
pub fn default_seed() -> Result<Vec<Product>> {
    parse_seed(SEED_PRODUCTS).context("embedded seed_products.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{CustomizationType, Limits};

    #[test]
    fn test_default_seed_loads() {
        let products = default_seed().unwrap();
        assert_eq!(products.len(), 4);
        assert!(products.iter().all(|p| p.active));

        let mut barcodes: Vec<&str> = products.iter().map(|p| p.barcode.as_str()).collect();
        barcodes.sort();
        barcodes.dedup();
        assert_eq!(barcodes.len(), products.len(), "barcodes must be unique");
    }

    #[test]
    fn test_seed_covers_every_customization_type() {
        let products = default_seed().unwrap();
        for kind in [
            CustomizationType::Names,
            CustomizationType::Text,
            CustomizationType::None,
        ] {
            assert!(products.iter().any(|p| p.customization_type == kind));
        }

        let ornament = products
            .iter()
            .find(|p| p.barcode == "RD-ORN-001")
            .unwrap();
        assert_eq!(
            ornament.limits(),
            Limits::Names {
                max_names: 4,
                max_chars_per_name: 12,
            }
        );
    }

    #[test]
    fn test_parse_seed_rejects_missing_fields() {
        let err = parse_seed("[[products]]\nname = \"No id\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid product seed TOML"));
    }

    #[test]
    fn test_parse_seed_empty_document() {
        assert!(parse_seed("").unwrap().is_empty());
    }
}
