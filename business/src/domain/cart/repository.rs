use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CartItem;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
    /// Upsert by item id.
    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
