use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    /// Upsert by order id.
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
