use serde::{Deserialize, Deserializer, Serialize};
use wasm_bindgen::prelude::*;

use crate::personalization::CustomizationPayload;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SetApiKeyArgs {
    service: String,
    key: String,
}

#[derive(Serialize)]
struct ServiceArgs {
    service: String,
}

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetProductArgs {
    product_id: String,
}

#[derive(Serialize)]
struct GetProductByBarcodeArgs {
    barcode: String,
}

#[derive(Serialize)]
struct SubmitOrderArgs {
    request: OrderRequest,
}

#[derive(Serialize)]
struct ListRecentOrdersArgs {
    limit: Option<usize>,
}

// -- Catalog types matching backend structs --

/// Which personalization policy applies to a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationType {
    Names,
    Text,
    #[default]
    #[serde(other)]
    None,
}

/// Per-product personalization bounds as stored in the catalog.
///
/// Every field is optional and parsed leniently: a value of the wrong shape
/// (a string where a count belongs, a zero or negative count) reads as absent
/// so the form falls back to its defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomizationRules {
    #[serde(default, deserialize_with = "lenient_count")]
    pub max_names: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub max_chars_per_name: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub max_chars: Option<u32>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub allow_special_chars: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default)]
    pub customization_type: CustomizationType,
    #[serde(default, deserialize_with = "lenient_rules")]
    pub customization_rules: Option<CustomizationRules>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn needs_customization(&self) -> bool {
        self.customization_type != CustomizationType::None
    }

    pub fn image_path(&self) -> String {
        match self.image_filename.as_deref() {
            Some(file) if !file.is_empty() => format!("/images/products/{}", file),
            _ => "/images/products/placeholder.jpg".to_string(),
        }
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let whole = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64));
    Ok(whole.filter(|n| *n > 0).and_then(|n| u32::try_from(n).ok()))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string()))
}

fn lenient_rules<'de, D>(deserializer: D) -> Result<Option<CustomizationRules>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

// -- Order intake types matching backend structs --

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub product_id: String,
    pub customer: CustomerInfo,
    pub customization: Option<CustomizationPayload>,
    pub pickup_confirmed: bool,
}

/// Returned once an order has been validated and recorded as pending.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderReceipt {
    pub order_number: String,
    pub product_name: String,
    pub total_price: f64,
    pub status: String,
    pub payment_available: bool,
    pub message: String,
}

/// A logged order, newest first in listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderRecord {
    pub order_number: String,
    pub product_id: String,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub customization: Option<CustomizationPayload>,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    pub total_price: f64,
    pub created_at: String,
}

// -- Health report matching backend struct --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthReport {
    pub catalog_source: String,
    pub store_url_set: bool,
    pub store_api_key_set: bool,
    pub catalog_reachable: bool,
    pub product_count: Option<usize>,
    pub catalog_error: Option<String>,
}

// -- Typed invoke helpers --

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

pub async fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetApiKeyArgs {
        service: service.to_string(),
        key: key.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("set_api_key", args).await.map(|_| ()).map_err(js_error)
}

pub async fn has_api_key(service: &str) -> Result<bool, String> {
    let args = serde_wasm_bindgen::to_value(&ServiceArgs {
        service: service.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("has_api_key", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_api_key(service: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&ServiceArgs {
        service: service.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("delete_api_key", args).await.map(|_| ()).map_err(js_error)
}

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    let args = serde_wasm_bindgen::to_value(&GetPreferenceArgs {
        key: key.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("get_preference", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetPreferenceArgs {
        key: key.to_string(),
        value: value.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("set_preference", args).await.map(|_| ()).map_err(js_error)
}

pub async fn run_health_check() -> Result<HealthReport, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("run_health_check", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_products() -> Result<Vec<Product>, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("list_products", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_product(product_id: &str) -> Result<Product, String> {
    let args = serde_wasm_bindgen::to_value(&GetProductArgs {
        product_id: product_id.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("get_product", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_product_by_barcode(barcode: &str) -> Result<Product, String> {
    let args = serde_wasm_bindgen::to_value(&GetProductByBarcodeArgs {
        barcode: barcode.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("get_product_by_barcode", args)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn submit_order(request: OrderRequest) -> Result<OrderReceipt, String> {
    let args = serde_wasm_bindgen::to_value(&SubmitOrderArgs { request })
        .map_err(|e| e.to_string())?;

    let result = invoke("submit_order", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_recent_orders(limit: Option<usize>) -> Result<Vec<OrderRecord>, String> {
    let args = serde_wasm_bindgen::to_value(&ListRecentOrdersArgs { limit })
        .map_err(|e| e.to_string())?;

    let result = invoke("list_recent_orders", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_full_record() {
        let json = r#"{
            "id": "p-1",
            "barcode": "0001",
            "name": "Family Sign",
            "description": "Cedar sign",
            "price": 45.5,
            "image_filename": "sign.jpg",
            "customization_type": "names",
            "customization_rules": {"max_names": 4, "max_chars_per_name": 12},
            "active": true,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.customization_type, CustomizationType::Names);
        let rules = product.customization_rules.unwrap();
        assert_eq!(rules.max_names, Some(4));
        assert_eq!(rules.max_chars_per_name, Some(12));
        assert_eq!(rules.placeholder, None);
    }

    #[test]
    fn test_malformed_rules_read_as_absent() {
        let json = r#"{
            "id": "p-2",
            "barcode": "0002",
            "name": "Mug",
            "price": 12,
            "customization_type": "text",
            "customization_rules": {"max_chars": "lots", "max_names": -3, "placeholder": 7}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let rules = product.customization_rules.unwrap();
        assert_eq!(rules.max_chars, None);
        assert_eq!(rules.max_names, None);
        assert_eq!(rules.placeholder, None);
    }

    #[test]
    fn test_whole_float_counts_accepted() {
        let rules: CustomizationRules =
            serde_json::from_str(r#"{"max_names": 2.0, "max_chars": 2.5}"#).unwrap();
        assert_eq!(rules.max_names, Some(2));
        assert_eq!(rules.max_chars, None);
    }

    #[test]
    fn test_non_object_rules_and_unknown_type() {
        let json = r#"{
            "id": "p-3",
            "barcode": "0003",
            "name": "Coaster",
            "price": 8,
            "customization_type": "engraving",
            "customization_rules": "not-a-bag"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.customization_type, CustomizationType::None);
        assert!(product.customization_rules.is_none());
        assert!(!product.needs_customization());
    }

    #[test]
    fn test_image_path_and_price() {
        let mut product: Product = serde_json::from_str(
            r#"{"id":"p","barcode":"b","name":"n","price":12.5,"customization_type":"none"}"#,
        )
        .unwrap();
        assert_eq!(product.image_path(), "/images/products/placeholder.jpg");
        assert_eq!(product.display_price(), "$12.50");

        product.image_filename = Some("tray.png".to_string());
        assert_eq!(product.image_path(), "/images/products/tray.png");
    }
}
