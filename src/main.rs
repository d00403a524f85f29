//! # World Clock Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires the Google-backed
//! lookup providers, and runs the Telegram bot alongside the health
//! check server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldclock_bot::bot::handlers::BotHandler;
use worldclock_bot::config::Config;
use worldclock_bot::services::geocode::GoogleGeocoder;
use worldclock_bot::services::health::HealthService;
use worldclock_bot::services::timezone::GoogleTimezone;
use worldclock_bot::services::worldclock::WorldClockService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldclock_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting World Clock Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - HTTP Port: {}", config.http_port);

    // Wire the lookup providers over one shared HTTP client
    let http = reqwest::Client::new();
    let geocoder = Arc::new(GoogleGeocoder::new(http.clone(), config.google_api_key.clone()));
    let timezones = Arc::new(GoogleTimezone::new(http, config.google_api_key));
    // Telegram profiles carry no UTC offset, so this deployment runs
    // without a user directory
    let service = Arc::new(WorldClockService::new(geocoder, timezones, None));

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(service);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
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

    // Wait for either task to complete (which would indicate shutdown)
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

    info!("Application stopped");
    Ok(())
}
