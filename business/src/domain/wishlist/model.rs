use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::WishlistError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

pub struct NewWishlistItemProps {
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl WishlistItem {
    pub fn new(props: NewWishlistItemProps) -> Result<Self, WishlistError> {
        if props.title.trim().is_empty() {
            return Err(WishlistError::TitleEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: format!("wishlist-{}-{}", props.product_id, now.timestamp_millis()),
            product_id: props.product_id,
            title: props.title,
            price: props.price,
            image: props.image,
            added_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        product_id: i64,
        title: String,
        price: f64,
        image: String,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            title,
            price,
            image,
            added_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_item_when_valid() {
        let result = WishlistItem::new(NewWishlistItemProps {
            product_id: 12,
            title: "SanDisk SSD".to_string(),
            price: 109.0,
            image: String::new(),
        });

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.product_id, 12);
        assert!(item.id.starts_with("wishlist-12-"));
    }

    #[test]
    fn should_reject_when_title_empty() {
        let result = WishlistItem::new(NewWishlistItemProps {
            product_id: 12,
            title: String::new(),
            price: 109.0,
            image: String::new(),
        });

        assert!(matches!(result.unwrap_err(), WishlistError::TitleEmpty));
    }
}
