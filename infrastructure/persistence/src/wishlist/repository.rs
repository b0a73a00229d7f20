use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistItemEntity;

pub struct WishlistRepositorySqlite {
    pool: SqlitePool,
}

impl WishlistRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT id, product_id, title, price, image, added_at FROM wishlist_items ORDER BY added_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, item: &WishlistItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO wishlist_items (id, product_id, title, price, image, added_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                price = excluded.price,
                image = excluded.image"#,
        )
        .bind(&item.id)
        .bind(item.product_id)
        .bind(&item.title)
        .bind(item.price)
        .bind(&item.image)
        .bind(item.added_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM wishlist_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM wishlist_items")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
