use anyhow::Result;
use tracing::info;

use super::session::{Session, Stage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg};

impl Engine {
    pub(super) async fn open_support(&self, turn: Turn) {
        self.sessions.set(turn.user, Session::new(Stage::Support)).await;
        self.say(turn, Msg::SupportPrompt, Some(keyboards::cancel_only(turn.lang)))
            .await;
    }

    /// Relays the message to the support recipient and the admins.
    pub(super) async fn support_text(&self, turn: Turn, text: &str) -> Result<Step> {
        if matches!(Label::parse(text), Some(Label::Cancel | Label::Back)) {
            return Ok(self.cancel(turn).await);
        }

        let recipients = self.admins.support_recipients();
        let mut delivered = 0;
        for to in recipients.iter().copied() {
            let forwarded = self
                .notify(to, |_| {
                    (
                        Msg::SupportForward {
                            from: turn.user,
                            text: text.to_string(),
                        },
                        None,
                    )
                })
                .await;
            if forwarded {
                delivered += 1;
            }
        }
        info!(
            "Support message from {} relayed to {}/{} recipients",
            turn.user,
            delivered,
            recipients.len()
        );

        self.say(turn, Msg::SupportSent, Some(keyboards::main_menu(turn.lang)))
            .await;
        Ok(Step::End)
    }
}
