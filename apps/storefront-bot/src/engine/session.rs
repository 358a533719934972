use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use storefront_db::models::CartItem;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopStage {
    ChooseType,
    ChooseCountry,
    ChooseQty,
    ChooseStars,
    CartReview,
    CheckoutConfirm,
    AwaitContact,
    AwaitReceipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStage {
    Menu,
    ChooseAmount,
    AwaitReceipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStage {
    AwaitLanguage,
    AwaitName,
    AwaitContact,
}

/// Current step of a conversation. Each variant belongs to exactly one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Shop(ShopStage),
    Wallet(WalletStage),
    Support,
    Broadcast,
    Profile(ProfileStage),
    AwaitCode,
}

impl Stage {
    pub fn awaits_receipt(self) -> bool {
        matches!(
            self,
            Stage::Shop(ShopStage::AwaitReceipt) | Stage::Wallet(WalletStage::AwaitReceipt)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl Verification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Values collected along the way that are not part of the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scratch {
    pub pending_country: Option<String>,
    pub pending_price: Option<u64>,
    pub checkout_total: Option<u64>,
    /// Amount a pending receipt will claim.
    pub charge_amount: Option<u64>,
    pub verification: Option<Verification>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub stage: Stage,
    pub cart: Vec<CartItem>,
    pub scratch: Scratch,
}

impl Session {
    pub fn new(stage: Stage) -> Self {
        Self::with_cart(stage, Vec::new())
    }

    pub fn with_cart(stage: Stage, cart: Vec<CartItem>) -> Self {
        Self {
            stage,
            cart,
            scratch: Scratch::default(),
        }
    }
}

/// Where in-progress conversations live between updates.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: i64) -> Option<Session>;
    async fn set(&self, user_id: i64, session: Session);
    async fn clear(&self, user_id: i64);
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Option<Session> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    async fn set(&self, user_id: i64, session: Session) {
        self.sessions.write().await.insert(user_id, session);
    }

    async fn clear(&self, user_id: i64) {
        self.sessions.write().await.remove(&user_id);
    }
}
