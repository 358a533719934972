use crate::db::Collection;
use crate::error::Result;
use crate::models::BroadcastRecord;

/// Append-only audit log of admin broadcasts.
#[derive(Debug, Clone)]
pub struct BroadcastRepository {
    log: Collection<BroadcastRecord>,
}

impl BroadcastRepository {
    pub fn new(log: Collection<BroadcastRecord>) -> Self {
        Self { log }
    }

    pub async fn append(&self, record: BroadcastRecord) -> Result<()> {
        self.log.insert(record).await
    }

    pub async fn list(&self) -> Vec<BroadcastRecord> {
        self.log.list().await
    }
}
