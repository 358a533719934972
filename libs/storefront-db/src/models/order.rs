use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;

/// A cart line with its price captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartItem {
    Number { country: String, price: u64, qty: u32 },
    Stars { price: u64, qty: u32 },
}

impl CartItem {
    pub fn subtotal(&self) -> u64 {
        match self {
            CartItem::Number { price, qty, .. } | CartItem::Stars { price, qty } => {
                price.saturating_mul(u64::from(*qty))
            }
        }
    }
}

pub fn cart_total(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::subtotal).fold(0, u64::saturating_add)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingAdmin,
    Paid,
    Approved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: i64,
    pub items: Vec<CartItem>,
    pub total: u64,
    pub status: OrderStatus,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Freezes `items` into a new order. The total is computed from the captured prices.
    pub fn new(user_id: i64, items: Vec<CartItem>, status: OrderStatus, phone: Option<String>) -> Self {
        let total = cart_total(&items);
        Self {
            order_id: super::new_id("ORD"),
            user_id,
            items,
            total,
            status,
            phone,
            created_at: Utc::now(),
            approved_at: None,
        }
    }
}

impl Record for Order {
    type Key = str;

    fn key(&self) -> &str {
        &self.order_id
    }
}
