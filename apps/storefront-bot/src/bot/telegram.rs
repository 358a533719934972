use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, MessageId};

use super::keyboards::to_reply_markup;
use crate::gateway::{Gateway, GatewayError, Keyboard, MessageRef};

/// [`Gateway`] backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn delivery(recipient: i64, e: teloxide::RequestError) -> GatewayError {
    GatewayError::Delivery {
        recipient,
        reason: e.to_string(),
    }
}

#[async_trait]
impl Gateway for TelegramGateway {
    async fn send_text(
        &self,
        to: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError> {
        let mut req = self.bot.send_message(ChatId(to), text);
        if let Some(keyboard) = keyboard {
            req = req.reply_markup(to_reply_markup(keyboard)?);
        }
        req.await.map(|_| ()).map_err(|e| delivery(to, e))
    }

    async fn send_photo(
        &self,
        to: i64,
        image: &str,
        caption: Option<&str>,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError> {
        let mut req = self
            .bot
            .send_photo(ChatId(to), InputFile::file_id(FileId(image.to_owned())));
        if let Some(caption) = caption {
            req = req.caption(caption);
        }
        if let Some(keyboard) = keyboard {
            req = req.reply_markup(to_reply_markup(keyboard)?);
        }
        req.await.map(|_| ()).map_err(|e| delivery(to, e))
    }

    async fn edit_caption(&self, message: MessageRef, caption: &str) -> Result<(), GatewayError> {
        self.bot
            .edit_message_caption(ChatId(message.chat_id), MessageId(message.message_id))
            .caption(caption)
            .await
            .map(|_| ())
            .map_err(|e| delivery(message.chat_id, e))
    }
}
