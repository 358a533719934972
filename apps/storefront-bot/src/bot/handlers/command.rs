use teloxide::prelude::*;
use tracing::debug;

use crate::engine::{Envelope, Inbound, Sender};
use crate::AppState;

/// Maps a Telegram message onto an engine event. Unsupported kinds yield `None`.
fn inbound(msg: &Message) -> Option<Inbound> {
    if let Some(text) = msg.text() {
        return Some(Inbound::parse_command(text).unwrap_or_else(|| Inbound::Text(text.to_string())));
    }
    if let Some(contact) = msg.contact() {
        let phone = Some(contact.phone_number.clone()).filter(|p| !p.trim().is_empty());
        return Some(Inbound::Contact { phone });
    }
    if let Some(photos) = msg.photo() {
        let largest = photos.last()?;
        return Some(Inbound::Photo {
            file_id: largest.file.id.0.clone(),
        });
    }
    None
}

/// The user behind a message. Chat ids only stand in when Telegram omits the author.
fn sender(msg: &Message) -> Sender {
    match &msg.from {
        Some(user) => Sender {
            id: user.id.0 as i64,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
        },
        None => Sender {
            id: msg.chat.id.0,
            first_name: String::new(),
            last_name: String::new(),
        },
    }
}

pub async fn message_handler(
    _bot: Bot,
    msg: Message,
    state: AppState,
) -> Result<(), teloxide::RequestError> {
    let Some(event) = inbound(&msg) else {
        debug!("Ignoring unsupported message {} in chat {}", msg.id.0, msg.chat.id.0);
        return Ok(());
    };

    let envelope = Envelope {
        sender: sender(&msg),
        event,
    };
    state.engine.handle(envelope).await;
    Ok(())
}
