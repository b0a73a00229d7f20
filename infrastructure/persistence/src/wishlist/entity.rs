use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::wishlist::model::WishlistItem;

#[derive(Debug, FromRow)]
pub struct WishlistItemEntity {
    pub id: String,
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

impl WishlistItemEntity {
    pub fn into_domain(self) -> WishlistItem {
        WishlistItem::from_repository(
            self.id,
            self.product_id,
            self.title,
            self.price,
            self.image,
            self.added_at,
        )
    }
}
