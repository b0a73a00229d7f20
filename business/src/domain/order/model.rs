use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::cart::model::CartItem;

use super::errors::OrderError;
use super::value_objects::{OrderStatus, PaymentMethod, ShippingAddress};

const ORDER_ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ORDER_ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Snapshot of the cart at checkout time, copied by value.
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        if props.items.is_empty() {
            return Err(OrderError::ItemsEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: generate_order_id(now),
            items: props.items,
            total_amount: props.total_amount,
            shipping_address: props.shipping_address,
            payment_method: props.payment_method,
            status: props.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        items: Vec<CartItem>,
        total_amount: f64,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            items,
            total_amount,
            shipping_address,
            payment_method,
            status,
            created_at,
            updated_at,
        }
    }
}

/// Timestamp plus a random uppercase base36 suffix. Collisions are
/// negligible at single-session order volume.
fn generate_order_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ORDER_ID_SUFFIX_LEN)
        .map(|_| ORDER_ID_CHARSET[rng.random_range(0..ORDER_ID_CHARSET.len())] as char)
        .collect();
    format!("ORD-{}-{}", now.timestamp_millis(), suffix)
}
