use async_trait::async_trait;
use thiserror::Error;

/// A button on a reply keyboard. Pressing it sends its label back as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyButton {
    Text(String),
    RequestContact(String),
}

/// A button attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineButton {
    Callback { label: String, data: String },
    Url { label: String, url: String },
}

/// Platform-neutral keyboard description, converted to markup by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    Reply {
        rows: Vec<Vec<ReplyButton>>,
        one_time: bool,
    },
    Inline(Vec<Vec<InlineButton>>),
}

impl Keyboard {
    pub fn reply(rows: Vec<Vec<ReplyButton>>) -> Self {
        Keyboard::Reply {
            rows,
            one_time: false,
        }
    }
}

#[cfg(test)]
impl Keyboard {
    /// All labels a user can echo back, row by row.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Keyboard::Reply { rows, .. } => rows
                .iter()
                .flatten()
                .map(|b| match b {
                    ReplyButton::Text(l) | ReplyButton::RequestContact(l) => l.as_str(),
                })
                .collect(),
            Keyboard::Inline(rows) => rows
                .iter()
                .flatten()
                .map(|b| match b {
                    InlineButton::Callback { label, .. } | InlineButton::Url { label, .. } => {
                        label.as_str()
                    }
                })
                .collect(),
        }
    }

    pub fn callback_data(&self) -> Vec<&str> {
        match self {
            Keyboard::Inline(rows) => rows
                .iter()
                .flatten()
                .filter_map(|b| match b {
                    InlineButton::Callback { data, .. } => Some(data.as_str()),
                    InlineButton::Url { .. } => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Identifies a message already delivered to a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i32,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("delivery to {recipient} failed: {reason}")]
    Delivery { recipient: i64, reason: String },
    #[error("invalid keyboard: {0}")]
    Keyboard(String),
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send_text(
        &self,
        to: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError>;

    async fn send_photo(
        &self,
        to: i64,
        image: &str,
        caption: Option<&str>,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError>;

    async fn edit_caption(&self, message: MessageRef, caption: &str) -> Result<(), GatewayError>;
}
