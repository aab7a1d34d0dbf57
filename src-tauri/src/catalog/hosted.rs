//! Read-only client for the hosted product table (PostgREST query API).

use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use super::types::Product;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HostedCatalog {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedCatalog {
    /// `base_url` is the project root, e.g. `https://abc.supabase.co`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, String> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| format!("Invalid store URL '{}': {}", base_url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("Store URL must use http or https: {}", base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Active products, newest first.
    pub async fn list_active(&self) -> Result<Vec<Product>, String> {
        self.fetch(&products_query(&self.base_url, &[], Some("created_at.desc"), None))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Product>, String> {
        let url = products_query(&self.base_url, &[("id", id)], None, Some(1));
        Ok(self.fetch(&url).await?.into_iter().next())
    }

    pub async fn get_by_barcode(&self, barcode: &str) -> Result<Option<Product>, String> {
        let url = products_query(&self.base_url, &[("barcode", barcode)], None, Some(1));
        Ok(self.fetch(&url).await?.into_iter().next())
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Product>, String> {
        info!("Querying hosted catalog: {}", url);
        let resp = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!("Hosted catalog error ({}): {}", status, body);
            return Err(format!("Store API error ({})", status));
        }

        resp.json()
            .await
            .map_err(|e| format!("Failed to parse products: {}", e))
    }
}

/// Build a products query restricted to active rows. Filter values are
/// matched with `eq.` and URL-encoded.
pub fn products_query(
    base_url: &str,
    filters: &[(&str, &str)],
    order: Option<&str>,
    limit: Option<usize>,
) -> String {
    let mut url = format!(
        "{}/rest/v1/products?select=*&active=eq.true",
        base_url.trim_end_matches('/')
    );
    for (column, value) in filters {
        url.push_str(&format!("&{}=eq.{}", column, urlencoding::encode(value)));
    }
    if let Some(order) = order {
        url.push_str(&format!("&order={}", order));
    }
    if let Some(limit) = limit {
        url.push_str(&format!("&limit={}", limit));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() {
        assert_eq!(
            products_query("https://abc.supabase.co/", &[], Some("created_at.desc"), None),
            "https://abc.supabase.co/rest/v1/products?select=*&active=eq.true&order=created_at.desc"
        );
    }

    #[test]
    fn test_filter_values_are_encoded() {
        assert_eq!(
            products_query("https://abc.supabase.co", &[("barcode", "RD 01&x=1")], None, Some(1)),
            "https://abc.supabase.co/rest/v1/products?select=*&active=eq.true&barcode=eq.RD%2001%26x%3D1&limit=1"
        );
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(HostedCatalog::new("not a url", "key").is_err());
        assert!(HostedCatalog::new("ftp://abc.supabase.co", "key").is_err());
    }

    #[test]
    fn test_new_normalizes_trailing_slash() {
        let catalog = HostedCatalog::new(" https://abc.supabase.co/ ", "key").unwrap();
        assert_eq!(catalog.base_url, "https://abc.supabase.co");
    }
}
