use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;

pub struct CartRepositorySqlite {
    pool: SqlitePool,
}

impl CartRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, product_id, title, price, image, quantity, added_at FROM cart_items ORDER BY added_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (id, product_id, title, price, image, quantity, added_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                price = excluded.price,
                image = excluded.image,
                quantity = excluded.quantity"#,
        )
        .bind(&item.id)
        .bind(item.product_id)
        .bind(&item.title)
        .bind(item.price)
        .bind(&item.image)
        .bind(i64::from(item.quantity))
        .bind(item.added_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items")
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
    use business::domain::cart::model::NewCartItemProps;

    fn item(product_id: i64, quantity: u32) -> CartItem {
        CartItem::new(NewCartItemProps {
            product_id,
            title: format!("Product {}", product_id),
            price: 9.5,
            image: String::new(),
            quantity,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_round_trip_items() {
        let repo = CartRepositorySqlite::new(test_pool().await);
        let first = item(1, 2);
        let second = item(2, 1);

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|i| i.id == first.id && i.quantity == 2));
        assert!(all.iter().any(|i| i.id == second.id && i.quantity == 1));
    }

    #[tokio::test]
    async fn should_upsert_by_id() {
        let repo = CartRepositorySqlite::new(test_pool().await);
        let original = item(1, 2);

        repo.save(&original).await.unwrap();
        repo.save(&original.with_quantity(5)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_delete_and_clear() {
        let repo = CartRepositorySqlite::new(test_pool().await);
        let first = item(1, 2);
        let second = item(2, 1);
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        repo.delete(&first.id).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 1);

        repo.clear().await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
