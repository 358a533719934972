use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use storefront_db::models::{Order, OrderStatus};
use tracing::info;

use super::session::{Session, Stage, Verification};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg};

/// Six decimal digits, zero padded.
pub fn generate_code() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000u32))
}

impl Engine {
    /// Replaces any previous code in the session and returns the new one.
    fn issue_code(&self, session: &mut Session) -> String {
        let code = generate_code();
        session.scratch.verification = Some(Verification {
            code: code.clone(),
            expires_at: Utc::now()
                .checked_add_signed(self.settings.code_expiry)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        code
    }

    /// A contact shared outside the receipt path starts order verification.
    pub(super) async fn start_verification(
        &self,
        turn: Turn,
        session: &mut Session,
        phone: &str,
    ) -> Step {
        session.scratch.phone = Some(phone.to_string());
        let code = self.issue_code(session);
        self.say(turn, Msg::CodeIssued { code }, None).await;
        self.say(turn, Msg::EnterCode, Some(keyboards::cancel_only(turn.lang)))
            .await;
        Step::Goto(Stage::AwaitCode)
    }

    pub(super) async fn verify_code(
        &self,
        turn: Turn,
        session: &mut Session,
        text: &str,
    ) -> Result<Step> {
        if matches!(Label::parse(text), Some(Label::Cancel | Label::Back)) {
            return Ok(self.cancel(turn).await);
        }

        let Some(pending) = session.scratch.verification.clone() else {
            let code = self.issue_code(session);
            self.say(turn, Msg::CodeIssued { code }, None).await;
            return Ok(Step::Stay);
        };

        if pending.is_expired(Utc::now()) {
            let code = self.issue_code(session);
            self.say(turn, Msg::CodeExpired { code }, Some(keyboards::cancel_only(turn.lang)))
                .await;
            return Ok(Step::Stay);
        }

        if text != pending.code {
            self.say(turn, Msg::InvalidCode, Some(keyboards::cancel_only(turn.lang)))
                .await;
            return Ok(Step::Stay);
        }

        self.finalize_verified_order(turn, session).await
    }

    async fn finalize_verified_order(&self, turn: Turn, session: &mut Session) -> Result<Step> {
        if session.cart.is_empty() {
            self.say(turn, Msg::CartEmpty, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Ok(Step::End);
        }

        let order = Order::new(
            turn.user,
            session.cart.clone(),
            OrderStatus::PendingAdmin,
            session.scratch.phone.clone(),
        );
        let order_id = order.order_id.clone();
        let total = order.total;
        self.db.orders.create(order).await?;
        info!("User {} verified order {} ({})", turn.user, order_id, total);

        self.say(
            turn,
            Msg::OrderRegistered {
                order_id: order_id.clone(),
            },
            Some(keyboards::main_menu(turn.lang)),
        )
        .await;
        self.notify_admins(|lang| {
            (
                Msg::AdminPendingOrder {
                    order_id: order_id.clone(),
                    user_id: turn.user,
                    total,
                },
                Some(keyboards::pending_order(lang, &order_id)),
            )
        })
        .await;
        Ok(Step::End)
    }
}
