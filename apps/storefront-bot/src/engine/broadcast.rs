use anyhow::Result;
use storefront_db::models::BroadcastRecord;
use tracing::info;

use super::session::{Session, Stage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg};

impl Engine {
    pub(super) async fn open_broadcast(&self, turn: Turn) {
        if !self.admins.is_admin(turn.user) {
            self.say(turn, Msg::AdminOnly, Some(keyboards::main_menu(turn.lang)))
                .await;
            return;
        }
        self.sessions.set(turn.user, Session::new(Stage::Broadcast)).await;
        self.say(turn, Msg::BroadcastPrompt, Some(keyboards::cancel_only(turn.lang)))
            .await;
    }

    /// Sends the text to every known user except the sender and records the tally.
    pub(super) async fn broadcast_text(&self, turn: Turn, text: &str) -> Result<Step> {
        if !self.admins.is_admin(turn.user) {
            self.say(turn, Msg::AdminOnly, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Ok(Step::End);
        }
        if matches!(Label::parse(text), Some(Label::Cancel | Label::Back)) {
            return Ok(self.cancel(turn).await);
        }

        let (mut sent, mut failed) = (0u32, 0u32);
        for user_id in self.db.users.all_ids().await {
            if user_id == turn.user {
                continue;
            }
            let delivered = self
                .notify(user_id, |_| {
                    (
                        Msg::BroadcastBody {
                            text: text.to_string(),
                        },
                        None,
                    )
                })
                .await;
            if delivered {
                sent += 1;
            } else {
                failed += 1;
            }
        }

        self.db
            .broadcasts
            .append(BroadcastRecord::new(turn.user, text.to_string(), sent, failed))
            .await?;
        info!("Broadcast by {}: {} sent, {} failed", turn.user, sent, failed);

        self.say(turn, Msg::BroadcastReport { sent, failed }, Some(keyboards::main_menu(turn.lang)))
            .await;
        Ok(Step::End)
    }
}
