pub mod broadcast_repo;
pub mod order_repo;
pub mod receipt_repo;
pub mod user_repo;

pub use broadcast_repo::BroadcastRepository;
pub use order_repo::OrderRepository;
pub use receipt_repo::ReceiptRepository;
pub use user_repo::{UserRepository, WalletCharge};

/// Outcome of a status transition that may only happen once.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Missing,
    Applied(T),
    /// The record had already left the state the transition starts from.
    Unchanged(T),
}
