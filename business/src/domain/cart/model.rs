use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::CartError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

pub struct NewCartItemProps {
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        if props.title.trim().is_empty() {
            return Err(CartError::TitleEmpty);
        }

        if props.quantity == 0 {
            return Err(CartError::QuantityZero);
        }

        let now = Utc::now();
        Ok(Self {
            id: format!("{}-{}", props.product_id, now.timestamp_millis()),
            product_id: props.product_id,
            title: props.title,
            price: props.price,
            image: props.image,
            quantity: props.quantity,
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
        quantity: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            title,
            price,
            image,
            quantity,
            added_at,
        }
    }

    /// Copy of this item with a different quantity, same identity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
