use std::env;

pub struct CatalogConfig {
    pub base_url: String,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_BASE_URL: remote catalog root (defaults to the Fake Store API)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| catalog::client::DEFAULT_BASE_URL.to_string()),
        }
    }
}
