use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_shared::Lang;
use storefront_shared::catalog::{POINTS_UNIT, VIP_THRESHOLD};

use crate::db::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub language: Lang,
    #[serde(default)]
    pub wallet_balance: u64,
    #[serde(default)]
    pub loyalty_points: u64,
    #[serde(default)]
    pub vip: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            language: Lang::default(),
            wallet_balance: 0,
            loyalty_points: 0,
            vip: false,
            created_at: Utc::now(),
        }
    }

    /// Adds one point per [`POINTS_UNIT`] spent. VIP status is granted once the
    /// threshold is reached and is never taken away here.
    pub fn award_points(&mut self, total: u64) -> u64 {
        let earned = total / POINTS_UNIT;
        self.loyalty_points = self.loyalty_points.saturating_add(earned);
        if self.loyalty_points >= VIP_THRESHOLD {
            self.vip = true;
        }
        earned
    }
}

impl Record for UserProfile {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.user_id
    }
}
