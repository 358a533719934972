use crate::gateway::MessageRef;

/// Who sent an update. In private chats the user id doubles as the chat id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
impl Sender {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command { name: String, args: String },
    Text(String),
    Contact { phone: Option<String> },
    Photo { file_id: String },
    Callback { data: String, message: Option<MessageRef> },
}

impl Inbound {
    /// Splits `/start@my_bot payload` into `start` and `payload`.
    pub fn parse_command(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let name = head.split('@').next().unwrap_or(head).to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }
        Some(Inbound::Command {
            name,
            args: args.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: Sender,
    pub event: Inbound,
}

/// Short notice shown to whoever pressed an inline button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    pub text: Option<String>,
}

impl Ack {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}
