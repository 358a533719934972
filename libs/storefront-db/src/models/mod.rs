pub mod broadcast;
pub mod order;
pub mod receipt;
pub mod user;

pub use broadcast::BroadcastRecord;
pub use order::{CartItem, Order, OrderStatus, cart_total};
pub use receipt::{Receipt, ReceiptStatus};
pub use user::UserProfile;

use chrono::Utc;
use uuid::Uuid;

/// Generates identifiers such as `ORD-250314093012-9f2c41ab`.
pub fn new_id(prefix: &str) -> String {
    let stamp = Utc::now().format("%y%m%d%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, stamp, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix_and_differ() {
        let a = new_id("ORD");
        let b = new_id("ORD");
        assert!(a.starts_with("ORD-"));
        assert_eq!(a.len(), "ORD-".len() + 12 + 1 + 8);
        assert_ne!(a, b);
    }
}
