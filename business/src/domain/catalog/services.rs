use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Read-only accessor for the remote catalog. Stateless, no retries.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
    async fn get_product(&self, id: i64) -> Result<Product, CatalogError>;
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;
    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError>;
}
