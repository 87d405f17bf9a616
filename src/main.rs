//! # Daily Quiz Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the quiz store, resolves
//! recipients and feedback texts, arms the daily scheduler, and runs the
//! Telegram dispatcher alongside the health endpoint.

use anyhow::{anyhow, Result};
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod database;
mod quiz;
mod services;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::bot::transport::{TelegramTransport, Transport};
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::database::store::QuizStore;
use crate::quiz::context::AppContext;
use crate::services::health::HealthService;
use crate::services::publisher::DailyPublisher;
use crate::services::scheduler::SchedulerService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daily_quiz_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Daily Quiz Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Store: {}, Timezone: {}, Schedule: {}, Debug: {}",
        config.database_url,
        config.timezone,
        config.schedule_time.format("%H:%M"),
        config.debug
    );

    // Initialize the store
    info!("Initializing quiz store...");
    let db = DatabaseManager::new(&config.database_url).await?;
    db.run_migrations().await?;
    let db = Arc::new(db);
    let store: Arc<dyn QuizStore> = db.clone();

    // Resolve recipients and feedback texts; a missing row is fatal and the
    // scheduler stays unarmed.
    let ctx = AppContext::load(store, &config).await?;
    info!(
        "Recipients resolved - publish chat {}, admin chat {}",
        ctx.recipients.publish, ctx.recipients.admin
    );

    // Initialize bot and transport
    info!("Initializing Telegram bot...");
    let tg_bot = Bot::new(&config.telegram_bot_token);
    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(tg_bot.clone()));

    // Arm the daily scheduler
    let publisher = Arc::new(DailyPublisher::new(ctx.clone(), transport.clone()));
    let mut scheduler = SchedulerService::new(publisher, &config)
        .await
        .map_err(|e| anyhow!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| anyhow!("Failed to start scheduler: {}", e))?;

    // Health endpoint
    let health_service = HealthService::new(db);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;
    info!("Health check server starting on port {}", config.http_port);

    // Run the dispatcher and the health server concurrently
    let handler = BotHandler::new(ctx, transport);
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(tg_bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Err(e) = scheduler.stop().await {
        tracing::warn!("Error stopping scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
