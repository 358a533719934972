use teloxide::prelude::*;
use tracing::{info, warn};

use crate::engine::{Envelope, Inbound, Sender};
use crate::gateway::MessageRef;
use crate::AppState;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
) -> Result<(), teloxide::RequestError> {
    info!("Received callback: {:?}", q.data);
    let callback_id = q.id.clone();

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(callback_id).await?;
        return Ok(());
    };

    let message = q.message.as_ref().map(|msg| MessageRef {
        chat_id: msg.chat().id.0,
        message_id: msg.id().0,
    });
    let sender = Sender {
        id: q.from.id.0 as i64,
        first_name: q.from.first_name.clone(),
        last_name: q.from.last_name.clone().unwrap_or_default(),
    };

    let ack = state
        .engine
        .handle(Envelope {
            sender,
            event: Inbound::Callback { data, message },
        })
        .await;

    let mut answer = bot.answer_callback_query(callback_id);
    if let Some(text) = ack.text {
        answer = answer.text(text);
    }
    if let Err(e) = answer.await {
        warn!("Failed to answer callback {:?}: {}", q.id, e);
    }
    Ok(())
}
