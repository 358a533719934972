//! The conversation engine. Every inbound event is routed by the sender's current
//! [`Stage`]; handlers return a [`Step`] that says where the conversation goes next.

mod admin;
mod broadcast;
pub mod event;
mod media;
mod profile;
pub mod session;
mod shop;
mod support;
mod verification;
mod wallet;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use storefront_db::Database;
use tracing::{debug, error, warn};

use crate::bot::keyboards;
use crate::gateway::{Gateway, Keyboard};
use crate::i18n::{tr, Label, Lang, Msg};
use crate::services::admin_service::AdminService;
pub use event::{Ack, Envelope, Inbound, Sender};
pub use session::{InMemorySessionStore, Session, SessionStore, Stage};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub code_expiry: chrono::Duration,
    pub creator_url: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            code_expiry: chrono::Duration::minutes(3),
            creator_url: None,
        }
    }
}

/// Where a conversation goes after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep the current stage, persisting any scratch or cart changes.
    Stay,
    Goto(Stage),
    /// Drop the session.
    End,
}

/// The user an update came from, with their language at the time it arrived.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Turn {
    pub user: i64,
    pub lang: Lang,
}

#[derive(Clone)]
pub struct Engine {
    db: Database,
    sessions: Arc<dyn SessionStore>,
    gateway: Arc<dyn Gateway>,
    admins: AdminService,
    settings: EngineSettings,
}

impl Engine {
    pub fn new(
        db: Database,
        sessions: Arc<dyn SessionStore>,
        gateway: Arc<dyn Gateway>,
        admins: AdminService,
        settings: EngineSettings,
    ) -> Self {
        Self {
            db,
            sessions,
            gateway,
            admins,
            settings,
        }
    }

    /// Processes one inbound update. Failures are logged and reported to the
    /// sender; the session is left as it was before the update.
    pub async fn handle(&self, envelope: Envelope) -> Ack {
        let user = envelope.sender.id;
        match self.dispatch(&envelope).await {
            Ok(ack) => ack,
            Err(e) => {
                error!("Failed to handle update from {}: {:#}", user, e);
                let lang = self.db.users.language(user).await;
                self.deliver(user, &tr(lang, &Msg::SomethingWentWrong), Some(&keyboards::main_menu(lang)))
                    .await;
                Ack::default()
            }
        }
    }

    async fn dispatch(&self, envelope: &Envelope) -> Result<Ack> {
        let sender = &envelope.sender;
        let profile = self
            .db
            .users
            .ensure(sender.id, &sender.first_name, &sender.last_name)
            .await?;
        let turn = Turn {
            user: sender.id,
            lang: profile.language,
        };

        match &envelope.event {
            Inbound::Command { name, .. } => self.on_command(turn, name).await?,
            Inbound::Text(text) => self.on_text(turn, text).await?,
            Inbound::Contact { phone } => self.on_contact(turn, phone.as_deref()).await?,
            Inbound::Photo { file_id } => self.on_photo(turn, file_id).await?,
            Inbound::Callback { data, message } => {
                return self.on_callback(turn, data, *message).await;
            }
        }
        Ok(Ack::default())
    }

    async fn on_command(&self, turn: Turn, name: &str) -> Result<()> {
        debug!("Command /{} from {}", name, turn.user);
        match name {
            "start" | "help" => {
                self.sessions.clear(turn.user).await;
                self.say(turn, Msg::Welcome, Some(keyboards::main_menu(turn.lang)))
                    .await;
            }
            "cancel" => {
                self.sessions.clear(turn.user).await;
                self.say(turn, Msg::Cancelled, Some(keyboards::main_menu(turn.lang)))
                    .await;
            }
            _ => {
                self.say(turn, Msg::UnknownCommand, Some(keyboards::main_menu(turn.lang)))
                    .await;
            }
        }
        Ok(())
    }

    async fn on_text(&self, turn: Turn, text: &str) -> Result<()> {
        let text = text.trim();
        let current = self.sessions.get(turn.user).await;

        if let Some(label) = Label::parse(text) {
            if self.on_menu(turn, label, current.as_ref()).await? {
                return Ok(());
            }
        }

        let Some(mut session) = current else {
            let msg = if Label::parse(text) == Some(Label::Back) {
                Msg::BackToMainMenu
            } else {
                Msg::MainMenu
            };
            self.say(turn, msg, Some(keyboards::main_menu(turn.lang))).await;
            return Ok(());
        };

        let step = match session.stage {
            Stage::Shop(stage) => self.shop_text(turn, &mut session, stage, text).await?,
            Stage::Wallet(stage) => self.wallet_text(turn, &mut session, stage, text).await?,
            Stage::Support => self.support_text(turn, text).await?,
            Stage::Broadcast => self.broadcast_text(turn, text).await?,
            Stage::Profile(stage) => self.profile_text(turn, stage, text).await?,
            Stage::AwaitCode => self.verify_code(turn, &mut session, text).await?,
        };
        self.apply(turn.user, session, step).await;
        Ok(())
    }

    /// Main-menu entries work from anywhere and replace whatever was in progress.
    /// Returns false for labels that only mean something inside a flow.
    async fn on_menu(&self, turn: Turn, label: Label, current: Option<&Session>) -> Result<bool> {
        match label {
            Label::BuyNumber => self.open_shop(turn, current).await,
            Label::BuyStars => self.open_stars(turn, current).await,
            Label::Cart => self.open_cart(turn, current).await,
            Label::Wallet => self.open_wallet(turn).await,
            Label::Profile => self.show_profile(turn).await?,
            Label::EditProfile => self.open_profile_edit(turn).await,
            Label::Language => self.open_language(turn).await,
            Label::Support => self.open_support(turn).await,
            Label::Broadcast => self.open_broadcast(turn).await,
            Label::About => {
                self.say(turn, Msg::About, Some(keyboards::main_menu(turn.lang)))
                    .await;
            }
            Label::Creator => {
                let keyboard = match &self.settings.creator_url {
                    Some(url) => keyboards::creator_links(turn.lang, url),
                    None => keyboards::main_menu(turn.lang),
                };
                self.say(turn, Msg::Creator, Some(keyboard)).await;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    async fn apply(&self, user: i64, mut session: Session, step: Step) {
        match step {
            Step::Stay => self.sessions.set(user, session).await,
            Step::Goto(stage) => {
                session.stage = stage;
                self.sessions.set(user, session).await;
            }
            Step::End => self.sessions.clear(user).await,
        }
    }

    /// Sends a localized message to the user a turn belongs to.
    async fn say(&self, turn: Turn, msg: Msg, keyboard: Option<Keyboard>) -> bool {
        self.deliver(turn.user, &tr(turn.lang, &msg), keyboard.as_ref())
            .await
    }

    /// Sends a message in the recipient's own language.
    async fn notify(&self, to: i64, msg: impl FnOnce(Lang) -> (Msg, Option<Keyboard>)) -> bool {
        let lang = self.db.users.language(to).await;
        let (msg, keyboard) = msg(lang);
        self.deliver(to, &tr(lang, &msg), keyboard.as_ref()).await
    }

    /// Notifies every admin, one failure never stopping the rest.
    async fn notify_admins(&self, msg: impl Fn(Lang) -> (Msg, Option<Keyboard>)) -> usize {
        let mut delivered = 0;
        for &admin in self.admins.admins() {
            if self.notify(admin, &msg).await {
                delivered += 1;
            }
        }
        delivered
    }

    async fn deliver(&self, to: i64, text: &str, keyboard: Option<&Keyboard>) -> bool {
        match self.gateway.send_text(to, text, keyboard).await {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}
