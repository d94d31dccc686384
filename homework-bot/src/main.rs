//! Homework Status Bot
//!
//! A polling worker that watches homework review statuses and reports
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tunables from the environment
//! - Repositories: the review API and the chat behind async traits
//! - Scheduler: the poll-check-notify loop and its error containment
//!
//! Missing credentials stop the process at startup. Every other failure
//! is reported to the chat and retried on the next cycle.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use homework_client::{PracticumClient, TelegramClient};
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::scheduler::StatusPoller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before the filter reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    info!("Starting homework status bot");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingCredentials(missing)) => {
            error!(?missing, "Required environment variables are missing, bot stopped");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: chat_id={}, endpoint={}",
        config.telegram_chat_id, config.practicum_endpoint
    );

    let http = homework_client::http_client(config.request_timeout)
        .context("Failed to build HTTP client")?;
    let practicum =
        PracticumClient::with_client(&config.practicum_endpoint, &config.practicum_token, http.clone());
    let telegram = TelegramClient::with_client(
        &config.telegram_api_url,
        &config.telegram_token,
        &config.telegram_chat_id,
        http,
    );

    info!(
        "Poll interval: {:?}, request timeout: {:?}",
        config.retry_period, config.request_timeout
    );

    let mut poller = StatusPoller::new(
        Arc::new(practicum),
        Arc::new(telegram),
        config.retry_period,
        chrono::Utc::now().timestamp(),
    );
    poller.run().await;

    Ok(())
}
