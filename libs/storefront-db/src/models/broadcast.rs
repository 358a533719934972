use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastRecord {
    pub broadcast_id: String,
    pub admin_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sent: u32,
    pub failed: u32,
}

impl BroadcastRecord {
    pub fn new(admin_id: i64, text: String, sent: u32, failed: u32) -> Self {
        Self {
            broadcast_id: super::new_id("BRD"),
            admin_id,
            text,
            created_at: Utc::now(),
            sent,
            failed,
        }
    }
}

impl Record for BroadcastRecord {
    type Key = str;

    fn key(&self) -> &str {
        &self.broadcast_id
    }
}
