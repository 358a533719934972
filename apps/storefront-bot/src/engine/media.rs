use anyhow::Result;
use storefront_db::models::Receipt;
use tracing::{info, warn};

use super::session::{ProfileStage, ShopStage, Stage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{tr, Msg};

impl Engine {
    pub(super) async fn on_contact(&self, turn: Turn, phone: Option<&str>) -> Result<()> {
        let Some(mut session) = self.sessions.get(turn.user).await else {
            self.say(turn, Msg::ContactNoSession, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Ok(());
        };
        let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) else {
            self.say(turn, Msg::ContactInvalid, None).await;
            return Ok(());
        };

        let step = match session.stage {
            Stage::Profile(ProfileStage::AwaitContact) => {
                self.db.users.set_phone(turn.user, phone).await?;
                self.say(turn, Msg::ProfileUpdated, Some(keyboards::main_menu(turn.lang)))
                    .await;
                Step::End
            }
            Stage::Shop(ShopStage::AwaitContact) => {
                session.scratch.phone = Some(phone.to_string());
                self.say(turn, Msg::SendReceipt, Some(keyboards::cancel_only(turn.lang)))
                    .await;
                Step::Goto(Stage::Shop(ShopStage::AwaitReceipt))
            }
            _ => self.start_verification(turn, &mut session, phone).await,
        };
        self.apply(turn.user, session, step).await;
        Ok(())
    }

    /// Accepts a payment receipt while one is awaited and hands it to the admins.
    pub(super) async fn on_photo(&self, turn: Turn, file_id: &str) -> Result<()> {
        let Some(session) = self.sessions.get(turn.user).await else {
            self.say(turn, Msg::PhotoUnexpected, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Ok(());
        };
        if !session.stage.awaits_receipt() {
            self.say(turn, Msg::PhotoNotAwaited, None).await;
            return Ok(());
        }

        let amount = session.scratch.charge_amount.unwrap_or_else(|| {
            warn!("Receipt from {} has no amount on record, storing 0", turn.user);
            0
        });
        let receipt = Receipt::new(
            turn.user,
            file_id.to_string(),
            amount,
            session.scratch.phone.clone(),
        );
        let receipt_id = receipt.receipt_id.clone();
        self.db.receipts.create(receipt).await?;
        info!("User {} submitted receipt {} for {}", turn.user, receipt_id, amount);

        for &admin in self.admins.admins() {
            let lang = self.db.users.language(admin).await;
            let notice = Msg::AdminNewReceipt {
                receipt_id: receipt_id.clone(),
                user_id: turn.user,
                amount,
            };
            self.deliver(admin, &tr(lang, &notice), None).await;
            let review = keyboards::receipt_review(lang, &receipt_id);
            if let Err(e) = self
                .gateway
                .send_photo(admin, file_id, None, Some(&review))
                .await
            {
                warn!("{}", e);
            }
        }

        self.say(turn, Msg::ReceiptSentAdmin, Some(keyboards::main_menu(turn.lang)))
            .await;
        self.apply(turn.user, session, Step::End).await;
        Ok(())
    }
}
