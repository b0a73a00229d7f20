use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;

pub struct OrderRepositorySqlite {
    pool: SqlitePool,
}

impl OrderRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, items, total_amount, shipping_address, payment_method, status, created_at, updated_at FROM orders ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let items =
            serde_json::to_string(&order.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address = serde_json::to_string(&order.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO orders (id, items, total_amount, shipping_address, payment_method, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT (id) DO UPDATE SET
                status = excluded.status,
                updated_at = excluded.updated_at"#,
        )
        .bind(&order.id)
        .bind(items)
        .bind(order.total_amount)
        .bind(shipping_address)
        .bind(order.payment_method.to_string())
        .bind(order.status.to_string())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use business::domain::cart::model::{CartItem, NewCartItemProps};
    use business::domain::order::model::NewOrderProps;
    use business::domain::order::value_objects::{OrderStatus, PaymentMethod, ShippingAddress};

    fn sample_order() -> Order {
        let items = vec![
            CartItem::new(NewCartItemProps {
                product_id: 1,
                title: "Backpack".to_string(),
                price: 109.95,
                image: String::new(),
                quantity: 2,
            })
            .unwrap(),
        ];
        Order::new(NewOrderProps {
            total_amount: items.iter().map(CartItem::line_total).sum(),
            items,
            shipping_address: ShippingAddress {
                full_name: "Demo User".to_string(),
                email: "demo@megamart.com".to_string(),
                phone: "5551234567".to_string(),
                address: "1 Main Street".to_string(),
                city: "Pune".to_string(),
                state: "MH".to_string(),
                pincode: "411001".to_string(),
            },
            payment_method: PaymentMethod::Upi,
            status: OrderStatus::Confirmed,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_round_trip_order_with_embedded_values() {
        let repo = OrderRepositorySqlite::new(test_pool().await);
        let order = sample_order();

        repo.save(&order).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        let loaded = &all[0];
        assert_eq!(loaded.id, order.id);
        assert_eq!(loaded.items, order.items);
        assert_eq!(loaded.shipping_address, order.shipping_address);
        assert_eq!(loaded.payment_method, PaymentMethod::Upi);
        assert_eq!(loaded.status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn should_clear_orders() {
        let repo = OrderRepositorySqlite::new(test_pool().await);
        repo.save(&sample_order()).await.unwrap();

        repo.clear().await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
