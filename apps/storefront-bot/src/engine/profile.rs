use anyhow::Result;
use storefront_shared::Lang;

use super::session::{ProfileStage, Session, Stage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg, ProfileCard};

/// First word is the first name, the rest is the last name.
fn split_name(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(match text.split_once(char::is_whitespace) {
        Some((first, last)) => (first, last.trim()),
        None => (text, ""),
    })
}

impl Engine {
    pub(super) async fn show_profile(&self, turn: Turn) -> Result<()> {
        let profile = self.db.users.get_or_create(turn.user).await?;
        let orders = self.db.orders.list_for_user(turn.user).await.len();
        let card = ProfileCard {
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            language: profile.language,
            balance: profile.wallet_balance,
            points: profile.loyalty_points,
            vip: profile.vip,
            orders,
        };
        self.say(turn, Msg::Profile(card), Some(keyboards::profile_menu(turn.lang)))
            .await;
        Ok(())
    }

    pub(super) async fn open_language(&self, turn: Turn) {
        self.sessions
            .set(turn.user, Session::new(Stage::Profile(ProfileStage::AwaitLanguage)))
            .await;
        self.say(turn, Msg::ChooseLanguage, Some(keyboards::language_keyboard(turn.lang)))
            .await;
    }

    pub(super) async fn open_profile_edit(&self, turn: Turn) {
        self.sessions
            .set(turn.user, Session::new(Stage::Profile(ProfileStage::AwaitName)))
            .await;
        self.say(turn, Msg::EnterName, Some(keyboards::cancel_only(turn.lang)))
            .await;
    }

    pub(super) async fn profile_text(
        &self,
        turn: Turn,
        stage: ProfileStage,
        text: &str,
    ) -> Result<Step> {
        let label = Label::parse(text);
        let step = match stage {
            ProfileStage::AwaitLanguage => {
                if label == Some(Label::Back) {
                    self.say(turn, Msg::BackToMainMenu, Some(keyboards::main_menu(turn.lang)))
                        .await;
                    return Ok(Step::End);
                }
                match Lang::from_native_label(text) {
                    Some(lang) => {
                        self.db.users.set_language(turn.user, lang).await?;
                        let turn = Turn { lang, ..turn };
                        self.say(turn, Msg::ProfileUpdated, Some(keyboards::main_menu(lang)))
                            .await;
                    }
                    None => {
                        self.say(turn, Msg::InvalidLanguage, Some(keyboards::main_menu(turn.lang)))
                            .await;
                    }
                }
                Step::End
            }

            ProfileStage::AwaitName => {
                if matches!(label, Some(Label::Cancel | Label::Back)) {
                    return Ok(self.cancel(turn).await);
                }
                match split_name(text) {
                    Some((first, last)) => {
                        self.db.users.set_name(turn.user, first, last).await?;
                        self.say(turn, Msg::SendContact, Some(keyboards::contact_request(turn.lang)))
                            .await;
                        Step::Goto(Stage::Profile(ProfileStage::AwaitContact))
                    }
                    None => {
                        self.say(turn, Msg::InvalidName, Some(keyboards::cancel_only(turn.lang)))
                            .await;
                        Step::Stay
                    }
                }
            }

            ProfileStage::AwaitContact => match label {
                Some(Label::Cancel | Label::Back) => self.cancel(turn).await,
                _ => {
                    self.say(turn, Msg::SendContact, Some(keyboards::contact_request(turn.lang)))
                        .await;
                    Step::Stay
                }
            },
        };
        Ok(step)
    }
}
