use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Source of the product catalog. One call, no retry, no cache.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}
