use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;

/// Row shape for the orders collection. The item snapshot and shipping
/// address are embedded values, stored as JSON.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: String,
    pub items: String,
    pub total_amount: f64,
    pub shipping_address: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let items =
            serde_json::from_str(&self.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address = serde_json::from_str(&self.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;
        let payment_method = self
            .payment_method
            .parse()
            .map_err(|_| RepositoryError::Persistence)?;
        let status = self
            .status
            .parse()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(Order::from_repository(
            self.id,
            items,
            self.total_amount,
            shipping_address,
            payment_method,
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}
