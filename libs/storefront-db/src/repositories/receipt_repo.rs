use chrono::Utc;

use super::Resolution;
use crate::db::Collection;
use crate::error::Result;
use crate::models::{Receipt, ReceiptStatus};

#[derive(Debug, Clone)]
pub struct ReceiptRepository {
    receipts: Collection<Receipt>,
}

impl ReceiptRepository {
    pub fn new(receipts: Collection<Receipt>) -> Self {
        Self { receipts }
    }

    pub async fn create(&self, receipt: Receipt) -> Result<()> {
        self.receipts.insert(receipt).await
    }

    pub async fn get(&self, receipt_id: &str) -> Option<Receipt> {
        self.receipts.get(receipt_id).await
    }

    /// Moves a pending receipt to `status`. Receipts that were already decided are
    /// returned as [`Resolution::Unchanged`].
    pub async fn resolve(
        &self,
        receipt_id: &str,
        status: ReceiptStatus,
        admin_id: i64,
    ) -> Result<Resolution<Receipt>> {
        let res = self
            .receipts
            .update(receipt_id, |receipt| {
                if !receipt.is_pending() {
                    return Resolution::Unchanged(receipt.clone());
                }
                receipt.status = status;
                receipt.resolved_at = Some(Utc::now());
                receipt.resolved_by = Some(admin_id);
                Resolution::Applied(receipt.clone())
            })
            .await?;
        Ok(res.unwrap_or(Resolution::Missing))
    }
}
