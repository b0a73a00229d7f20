use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::CartItem;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: String,
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.product_id,
            self.title,
            self.price,
            self.image,
            u32::try_from(self.quantity).unwrap_or(u32::MAX),
            self.added_at,
        )
    }
}
