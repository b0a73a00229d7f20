use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

/// Holds zero or one user record under a fixed "current session" key.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_current(&self) -> Result<Option<User>, RepositoryError>;
    /// Upsert under the sentinel key.
    async fn set_current(&self, user: &User) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
