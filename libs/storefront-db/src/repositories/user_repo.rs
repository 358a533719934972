use storefront_shared::Lang;

use crate::db::Collection;
use crate::error::Result;
use crate::models::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletCharge {
    Charged {
        balance: u64,
        points_earned: u64,
        became_vip: bool,
    },
    Insufficient {
        balance: u64,
    },
}

#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Collection<UserProfile>,
}

impl UserRepository {
    pub fn new(users: Collection<UserProfile>) -> Self {
        Self { users }
    }

    pub async fn get(&self, user_id: i64) -> Option<UserProfile> {
        self.users.get(&user_id).await
    }

    pub async fn get_or_create(&self, user_id: i64) -> Result<UserProfile> {
        self.users
            .get_or_insert_with(&user_id, || UserProfile::new(user_id))
            .await
    }

    /// Creates the profile on first contact, seeding the name from the chat platform.
    /// Existing profiles are returned untouched.
    pub async fn ensure(&self, user_id: i64, first_name: &str, last_name: &str) -> Result<UserProfile> {
        self.users
            .get_or_insert_with(&user_id, || {
                let mut user = UserProfile::new(user_id);
                user.first_name = first_name.to_string();
                user.last_name = last_name.to_string();
                user
            })
            .await
    }

    /// Language of a user, without creating a profile for unknown ids.
    pub async fn language(&self, user_id: i64) -> Lang {
        self.get(user_id).await.map(|u| u.language).unwrap_or_default()
    }

    pub async fn set_language(&self, user_id: i64, lang: Lang) -> Result<()> {
        self.users
            .upsert(&user_id, || UserProfile::new(user_id), |u| u.language = lang)
            .await
    }

    pub async fn set_phone(&self, user_id: i64, phone: &str) -> Result<()> {
        self.users
            .upsert(&user_id, || UserProfile::new(user_id), |u| u.phone = phone.to_string())
            .await
    }

    pub async fn set_name(&self, user_id: i64, first_name: &str, last_name: &str) -> Result<()> {
        self.users
            .upsert(&user_id, || UserProfile::new(user_id), |u| {
                u.first_name = first_name.to_string();
                u.last_name = last_name.to_string();
            })
            .await
    }

    /// Adds `amount` to the wallet and returns the new balance.
    pub async fn credit(&self, user_id: i64, amount: u64) -> Result<u64> {
        self.users
            .upsert(&user_id, || UserProfile::new(user_id), |u| {
                u.wallet_balance = u.wallet_balance.saturating_add(amount);
                u.wallet_balance
            })
            .await
    }

    /// Debits `total` and awards loyalty points in one step, or leaves the profile
    /// untouched when the balance does not cover it.
    pub async fn charge_wallet(&self, user_id: i64, total: u64) -> Result<WalletCharge> {
        self.users
            .upsert(&user_id, || UserProfile::new(user_id), |u| {
                let Some(balance) = u.wallet_balance.checked_sub(total) else {
                    return WalletCharge::Insufficient {
                        balance: u.wallet_balance,
                    };
                };
                let was_vip = u.vip;
                u.wallet_balance = balance;
                let points_earned = u.award_points(total);
                WalletCharge::Charged {
                    balance,
                    points_earned,
                    became_vip: u.vip && !was_vip,
                }
            })
            .await
    }

    pub async fn all_ids(&self) -> Vec<i64> {
        self.users.list().await.into_iter().map(|u| u.user_id).collect()
    }
}
