use reqwest::{Client, Url};

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Shared catalog HTTP client configuration.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the endpoint URL for a single product.
    pub fn product_url(&self, id: i64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Returns the category listing endpoint URL.
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// Returns the per-category listing URL. Category names contain
    /// spaces and apostrophes ("men's clothing"), so the segment is
    /// percent-encoded.
    pub fn category_url(&self, category: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .extend(["products", "category", category]);
        Some(url)
    }
}
