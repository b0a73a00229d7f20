use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::WishlistItem;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError>;
    /// Upsert by item id.
    async fn save(&self, item: &WishlistItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
