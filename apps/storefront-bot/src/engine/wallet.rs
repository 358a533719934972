use anyhow::Result;
use storefront_shared::catalog::parse_positive;

use super::session::{Session, Stage, WalletStage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg};

impl Engine {
    pub(super) async fn open_wallet(&self, turn: Turn) {
        self.sessions
            .set(turn.user, Session::new(Stage::Wallet(WalletStage::Menu)))
            .await;
        self.say(turn, Msg::WalletMenu, Some(keyboards::wallet_menu(turn.lang)))
            .await;
    }

    pub(super) async fn wallet_text(
        &self,
        turn: Turn,
        session: &mut Session,
        stage: WalletStage,
        text: &str,
    ) -> Result<Step> {
        let label = Label::parse(text);
        let step = match stage {
            WalletStage::Menu => match label {
                Some(Label::TopUp) => {
                    self.say(turn, Msg::ChooseTopupAmount, Some(keyboards::make_amount_keyboard(turn.lang)))
                        .await;
                    Step::Goto(Stage::Wallet(WalletStage::ChooseAmount))
                }
                Some(Label::ShowBalance) => {
                    let profile = self.db.users.get_or_create(turn.user).await?;
                    let msg = Msg::WalletBalance {
                        amount: profile.wallet_balance,
                    };
                    self.say(turn, msg, Some(keyboards::main_menu(turn.lang))).await;
                    Step::End
                }
                Some(Label::Back) => {
                    self.say(turn, Msg::BackToMainMenu, Some(keyboards::main_menu(turn.lang)))
                        .await;
                    Step::End
                }
                _ => {
                    self.say(turn, Msg::WalletMenu, Some(keyboards::wallet_menu(turn.lang)))
                        .await;
                    Step::Stay
                }
            },

            WalletStage::ChooseAmount => {
                if label == Some(Label::Back) {
                    self.say(turn, Msg::WalletMenu, Some(keyboards::wallet_menu(turn.lang)))
                        .await;
                    return Ok(Step::Goto(Stage::Wallet(WalletStage::Menu)));
                }
                match parse_positive(text) {
                    Some(amount) => {
                        session.scratch.charge_amount = Some(amount);
                        self.say(turn, Msg::SendReceipt, Some(keyboards::cancel_only(turn.lang)))
                            .await;
                        Step::Goto(Stage::Wallet(WalletStage::AwaitReceipt))
                    }
                    None => {
                        self.say(turn, Msg::InvalidAmount, Some(keyboards::make_amount_keyboard(turn.lang)))
                            .await;
                        Step::Stay
                    }
                }
            }

            WalletStage::AwaitReceipt => match label {
                Some(Label::Cancel | Label::Back) => self.cancel(turn).await,
                _ => {
                    self.say(turn, Msg::SendReceipt, Some(keyboards::cancel_only(turn.lang)))
                        .await;
                    Step::Stay
                }
            },
        };
        Ok(step)
    }
}
