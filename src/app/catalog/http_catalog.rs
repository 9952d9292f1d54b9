use crate::core::{CatalogProvider, ConfigProvider, Product};
use crate::utils::error::{Result, ShopError};
use reqwest::Client;
use std::time::Duration;

pub struct HttpCatalog<C: ConfigProvider> {
    pub(crate) config: C,
    pub(crate) client: Client,
}

impl<C: ConfigProvider> HttpCatalog<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .map_err(|e| ShopError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        self.config.catalog_endpoint()
    }
}

/// Decodes the catalog body. Anything other than an array of product
/// objects is an unusable response.
pub fn parse_products(body: serde_json::Value) -> Result<Vec<Product>> {
    if !body.is_array() {
        return Err(ShopError::CatalogFetchFailed {
            reason: "expected a JSON array of products".to_string(),
        });
    }
    serde_json::from_value(body).map_err(|e| ShopError::CatalogFetchFailed {
        reason: format!("malformed product record: {}", e),
    })
}

#[async_trait::async_trait]
impl<C: ConfigProvider> CatalogProvider for HttpCatalog<C> {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!("Fetching catalog from: {}", self.endpoint());

        let mut request = self.client.get(self.endpoint());
        for (name, value) in self.config.headers() {
            request = request.header(name, value);
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(ShopError::CatalogFetchFailed {
                reason: format!("HTTP {}", status),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let products = parse_products(body)?;
        tracing::debug!("Decoded {} products", products.len());
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_accepts_array() {
        let body = serde_json::json!([
            {"id": 1, "title": "Shirt", "price": 22.3, "category": "men's clothing",
             "description": "Slim fit", "image": "shirt.jpg"},
            {"id": 2, "title": "Jacket", "price": 55.99, "category": "men's clothing",
             "description": "Warm", "image": "jacket.jpg", "rating": {"rate": 4.7, "count": 500}}
        ]);

        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].title, "Jacket");
    }

    #[test]
    fn test_parse_products_rejects_object() {
        let err = parse_products(serde_json::json!({"error": "nope"})).unwrap_err();
        assert!(err.is_catalog_failure());
    }

    #[test]
    fn test_parse_products_rejects_missing_fields() {
        let err = parse_products(serde_json::json!([{"id": 1, "title": "No price"}])).unwrap_err();
        assert!(err.is_catalog_failure());
        assert!(err.to_string().contains("malformed product record"));
    }
}
