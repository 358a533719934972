use chrono::Utc;

use super::Resolution;
use crate::db::Collection;
use crate::error::Result;
use crate::models::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub struct OrderRepository {
    orders: Collection<Order>,
}

impl OrderRepository {
    pub fn new(orders: Collection<Order>) -> Self {
        Self { orders }
    }

    pub async fn create(&self, order: Order) -> Result<()> {
        self.orders.insert(order).await
    }

    pub async fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).await
    }

    /// Marks the order approved. Approving twice leaves the first approval in place.
    pub async fn approve(&self, order_id: &str) -> Result<Resolution<Order>> {
        let res = self
            .orders
            .update(order_id, |order| {
                if order.status == OrderStatus::Approved {
                    return Resolution::Unchanged(order.clone());
                }
                order.status = OrderStatus::Approved;
                order.approved_at = Some(Utc::now());
                Resolution::Applied(order.clone())
            })
            .await?;
        Ok(res.unwrap_or(Resolution::Missing))
    }

    pub async fn list_for_user(&self, user_id: i64) -> Vec<Order> {
        self.orders
            .list()
            .await
            .into_iter()
            .filter(|o| o.user_id == user_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;

    #[tokio::test]
    async fn approval_is_idempotent() {
        let orders = OrderRepository::new(Collection::in_memory("orders"));
        let order = Order::new(
            3,
            vec![CartItem::Stars { price: 1_500, qty: 10 }],
            OrderStatus::PendingAdmin,
            None,
        );
        let id = order.order_id.clone();
        orders.create(order).await.unwrap();

        let first = orders.approve(&id).await.unwrap();
        let Resolution::Applied(approved) = first else {
            panic!("expected first approval to apply");
        };
        assert_eq!(approved.status, OrderStatus::Approved);

        let second = orders.approve(&id).await.unwrap();
        assert!(matches!(second, Resolution::Unchanged(o) if o.approved_at == approved.approved_at));

        assert_eq!(orders.approve("ORD-missing").await.unwrap(), Resolution::Missing);
        assert_eq!(orders.list_for_user(3).await.len(), 1);
    }
}
