use anyhow::Result;
use storefront_db::models::ReceiptStatus;
use storefront_db::repositories::Resolution;
use storefront_shared::AdminAction;
use tracing::{debug, info, warn};

use super::event::Ack;
use super::{Engine, Turn};
use crate::gateway::MessageRef;
use crate::i18n::{tr, Msg};

impl Engine {
    pub(super) async fn on_callback(
        &self,
        turn: Turn,
        data: &str,
        message: Option<MessageRef>,
    ) -> Result<Ack> {
        let Some(action) = AdminAction::parse(data) else {
            debug!("Ignoring callback {:?} from {}", data, turn.user);
            return Ok(Ack::default());
        };
        if !self.admins.is_admin(turn.user) {
            warn!("Non-admin {} pressed {}", turn.user, action);
            return Ok(self.ack(turn, Msg::AdminOnly));
        }

        match action {
            AdminAction::ApproveReceipt(id) => {
                self.resolve_receipt(turn, &id, ReceiptStatus::Approved, message)
                    .await
            }
            AdminAction::RejectReceipt(id) => {
                self.resolve_receipt(turn, &id, ReceiptStatus::Rejected, message)
                    .await
            }
            AdminAction::ViewOrder(id) => self.view_order(turn, &id).await,
            AdminAction::ApproveOrder(id) => self.approve_order(turn, &id).await,
        }
    }

    fn ack(&self, turn: Turn, msg: Msg) -> Ack {
        Ack::text(tr(turn.lang, &msg))
    }

    /// Approving credits the wallet exactly once; a receipt that already left
    /// the pending state is reported back without side effects.
    async fn resolve_receipt(
        &self,
        turn: Turn,
        receipt_id: &str,
        status: ReceiptStatus,
        message: Option<MessageRef>,
    ) -> Result<Ack> {
        let receipt = match self.db.receipts.resolve(receipt_id, status, turn.user).await? {
            Resolution::Missing => return Ok(self.ack(turn, Msg::ReceiptNotFound)),
            Resolution::Unchanged(_) => return Ok(self.ack(turn, Msg::ReceiptAlreadyResolved)),
            Resolution::Applied(receipt) => receipt,
        };

        let (user_notice, caption, ack) = match status {
            ReceiptStatus::Approved => {
                let balance = self.db.users.credit(receipt.user_id, receipt.amount).await?;
                info!(
                    "Receipt {} approved by {}: user {} credited {} (balance {})",
                    receipt_id, turn.user, receipt.user_id, receipt.amount, balance
                );
                (
                    Msg::ReceiptApproved {
                        amount: receipt.amount,
                    },
                    Msg::CaptionApproved,
                    Msg::ReceiptApprovedAck,
                )
            }
            _ => {
                info!("Receipt {} rejected by {}", receipt_id, turn.user);
                (Msg::ReceiptRejected, Msg::CaptionRejected, Msg::ReceiptRejectedAck)
            }
        };

        self.notify(receipt.user_id, |_| (user_notice, None)).await;
        if let Some(message) = message {
            if let Err(e) = self
                .gateway
                .edit_caption(message, &tr(turn.lang, &caption))
                .await
            {
                warn!("Failed to mark receipt {}: {}", receipt_id, e);
            }
        }
        Ok(self.ack(turn, ack))
    }

    async fn view_order(&self, turn: Turn, order_id: &str) -> Result<Ack> {
        let Some(order) = self.db.orders.get(order_id).await else {
            return Ok(self.ack(turn, Msg::OrderNotFound));
        };
        let details = serde_json::to_string_pretty(&order)?;
        let msg = Msg::OrderDetails {
            order_id: order.order_id,
            details,
        };
        self.say(turn, msg, None).await;
        Ok(self.ack(turn, Msg::OrderSentAck))
    }

    async fn approve_order(&self, turn: Turn, order_id: &str) -> Result<Ack> {
        let order = match self.db.orders.approve(order_id).await? {
            Resolution::Missing => return Ok(self.ack(turn, Msg::OrderNotFound)),
            Resolution::Unchanged(_) => return Ok(self.ack(turn, Msg::OrderAlreadyApproved)),
            Resolution::Applied(order) => order,
        };
        info!("Order {} approved by {}", order.order_id, turn.user);

        self.say(
            turn,
            Msg::OrderApprovedAdmin {
                order_id: order.order_id.clone(),
            },
            None,
        )
        .await;
        self.notify(order.user_id, |_| {
            (
                Msg::OrderApprovedUser {
                    order_id: order.order_id.clone(),
                },
                None,
            )
        })
        .await;
        Ok(self.ack(turn, Msg::OrderApprovedAck))
    }
}
