use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Pending,
    Approved,
    Rejected,
}

/// Proof of payment uploaded by a user, waiting for an admin decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: String,
    pub user_id: i64,
    /// Platform reference of the uploaded photo.
    pub file_id: String,
    pub amount: u64,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: ReceiptStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_by: Option<i64>,
}

impl Receipt {
    pub fn new(user_id: i64, file_id: String, amount: u64, phone: Option<String>) -> Self {
        Self {
            receipt_id: super::new_id("RCP"),
            user_id,
            file_id,
            amount,
            phone,
            status: ReceiptStatus::Pending,
            created_at: Utc::now(),
            resolved_at: None,
            resolved_by: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReceiptStatus::Pending
    }
}

impl Record for Receipt {
    type Key = str;

    fn key(&self) -> &str {
        &self.receipt_id
    }
}
