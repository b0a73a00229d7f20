use async_trait::async_trait;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Product, Rating};
use business::domain::catalog::services::CatalogService;

use crate::client::CatalogClient;

#[derive(Debug, Deserialize)]
struct RatingDto {
    rate: f64,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    id: i64,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    rating: Option<RatingDto>,
}

impl ProductDto {
    fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        }
    }
}

/// Fake Store API accessor. Read-only, no retries; every failure mode
/// collapses into the generic fetch error.
pub struct FakeStoreCatalog {
    client: CatalogClient,
}

impl FakeStoreCatalog {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn fetch_products(&self, url: impl reqwest::IntoUrl) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed);
        }

        let products: Vec<ProductDto> =
            response.json().await.map_err(|_| CatalogError::FetchFailed)?;
        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }
}

#[async_trait]
impl CatalogService for FakeStoreCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products(self.client.products_url()).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(id))
            .send()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed);
        }

        let product: ProductDto =
            response.json().await.map_err(|_| CatalogError::FetchFailed)?;
        Ok(product.into_domain())
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.categories_url())
            .send()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed);
        }

        response.json().await.map_err(|_| CatalogError::FetchFailed)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = self
            .client
            .category_url(category)
            .ok_or(CatalogError::FetchFailed)?;
        self.fetch_products(url).await
    }
}
