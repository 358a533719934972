pub mod db;
pub mod error;
pub mod models;
pub mod repositories;

use std::path::Path;

use tracing::info;

pub use error::{Result, StoreError};
use db::Collection;
use repositories::{BroadcastRepository, OrderRepository, ReceiptRepository, UserRepository};

/// The four collections the bot persists.
#[derive(Debug, Clone)]
pub struct Database {
    pub users: UserRepository,
    pub orders: OrderRepository,
    pub receipts: ReceiptRepository,
    pub broadcasts: BroadcastRepository,
}

impl Database {
    pub fn in_memory() -> Self {
        Self {
            users: UserRepository::new(Collection::in_memory("users")),
            orders: OrderRepository::new(Collection::in_memory("orders")),
            receipts: ReceiptRepository::new(Collection::in_memory("receipts")),
            broadcasts: BroadcastRepository::new(Collection::in_memory("broadcasts")),
        }
    }
}

/// Opens (or creates) the JSON snapshot files under `data_dir`.
pub async fn connect(data_dir: impl AsRef<Path>) -> Result<Database> {
    let dir = data_dir.as_ref();
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| StoreError::Io {
            collection: "data_dir",
            source,
        })?;

    let db = Database {
        users: UserRepository::new(Collection::open("users", dir.join("users.json")).await),
        orders: OrderRepository::new(Collection::open("orders", dir.join("orders.json")).await),
        receipts: ReceiptRepository::new(Collection::open("receipts", dir.join("receipts.json")).await),
        broadcasts: BroadcastRepository::new(
            Collection::open("broadcasts", dir.join("broadcast.json")).await,
        ),
    };
    info!("Record store ready at {}", dir.display());
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{BroadcastRecord, CartItem, Order, OrderStatus, Receipt, ReceiptStatus};
    use repositories::Resolution;

    #[tokio::test]
    async fn data_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let db = connect(dir.path()).await.unwrap();
        db.users.credit(10, 75_000).await.unwrap();
        let receipt = Receipt::new(10, "file-abc".into(), 75_000, Some("+98912".into()));
        let receipt_id = receipt.receipt_id.clone();
        db.receipts.create(receipt).await.unwrap();
        db.broadcasts
            .append(BroadcastRecord::new(1, "Sale!".into(), 1, 1))
            .await
            .unwrap();

        let db = connect(dir.path()).await.unwrap();
        assert_eq!(db.users.get(10).await.unwrap().wallet_balance, 75_000);
        assert_eq!(db.broadcasts.list().await.len(), 1);
        let res = db
            .receipts
            .resolve(&receipt_id, ReceiptStatus::Rejected, 1)
            .await
            .unwrap();
        assert!(matches!(res, Resolution::Applied(_)));
    }

    #[tokio::test]
    async fn failed_writes_do_not_leak_into_memory() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");

        let db = connect(&data).await.unwrap();
        db.users.ensure(10, "Sara", "K").await.unwrap();
        let receipt = Receipt::new(10, "file-abc".into(), 50_000, None);
        let receipt_id = receipt.receipt_id.clone();
        db.receipts.create(receipt).await.unwrap();

        std::fs::remove_dir_all(&data).unwrap();

        // returning users are served without a snapshot write
        assert_eq!(db.users.ensure(10, "Sara", "K").await.unwrap().first_name, "Sara");

        let items = vec![CartItem::Number {
            country: "USA".into(),
            price: 40_000,
            qty: 1,
        }];
        let order = Order::new(10, items, OrderStatus::Paid, None);
        let order_id = order.order_id.clone();
        assert!(db.orders.create(order).await.is_err());
        assert!(db.orders.get(&order_id).await.is_none());
        assert!(
            db.receipts
                .resolve(&receipt_id, ReceiptStatus::Approved, 1)
                .await
                .is_err()
        );

        std::fs::create_dir_all(&data).unwrap();
        let res = db
            .receipts
            .resolve(&receipt_id, ReceiptStatus::Approved, 1)
            .await
            .unwrap();
        assert!(matches!(res, Resolution::Applied(_)));
    }
}
