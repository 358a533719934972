use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod engine;
mod gateway;
mod i18n;
mod services;
mod state;

use crate::bot::telegram::TelegramGateway;
use crate::config::BotConfig;
use crate::engine::{Engine, EngineSettings, InMemorySessionStore};
use crate::services::admin_service::AdminService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_bot=info,storefront_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Storefront Bot...");

    let config = BotConfig::load()?;
    let db = storefront_db::connect(&config.data_dir)
        .await
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    info!(
        "Loaded {} admins, data in {}",
        config.admin_ids.len(),
        config.data_dir.display()
    );

    let bot = Bot::new(config.bot_token.clone());
    let engine = Engine::new(
        db,
        Arc::new(InMemorySessionStore::new()),
        Arc::new(TelegramGateway::new(bot.clone())),
        AdminService::new(config.admin_ids.clone(), config.support_id),
        EngineSettings {
            code_expiry: config.code_expiry(),
            creator_url: config.creator_url.clone(),
        },
    );
    let state = AppState { engine };

    let (tx, rx) = tokio::sync::broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(());
        }
    });

    bot::run_bot(bot, rx, state).await;
    Ok(())
}
