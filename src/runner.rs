//! Startup sequence and run loop: config, Telegram client, webhook
//! registration, HTTP ingress, then the dispatch loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::bot::{Bot, TelegramBot};
use crate::config::BotConfig;
use crate::dispatch::run_dispatch_loop;
use crate::logger::init_tracing;
use crate::queue::UpdateQueue;
use crate::webhook::{webhook_router, WebhookState};

/// Builds the teloxide client for the config. A `TELEGRAM_API_URL` that
/// parses overrides the API base URL (tests point it at a mock server); an
/// unparseable one is logged and ignored.
fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Main entry: validate config, init logging, authorize the bot (`getMe`),
/// register the webhook, serve the HTTP ingress on a spawned task, then run
/// the dispatch loop in the calling task. Any startup step failing aborts;
/// after startup the function returns only if the update queue closes.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    init_tracing(&config.log_file)?;

    info!(
        port = config.port,
        webhook_url = %config.webhook_url,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let me = teloxide_bot
        .get_me()
        .await
        .context("getMe failed, check TELEGRAM_BBBOT_TOKEN")?;
    if let Some(username) = &me.user.username {
        info!(username = %username, "Authorized on Telegram");
    }

    let bot: Arc<dyn Bot> = Arc::new(TelegramBot::new(teloxide_bot));
    bot.register_webhook(&config.webhook_url)
        .await
        .context("Webhook registration failed")?;
    info!(url = %config.webhook_url, "Webhook registered");

    let mut queue = UpdateQueue::new();
    let update_rx = queue
        .take_receiver()
        .ok_or_else(|| anyhow::anyhow!("Update receiver already taken"))?;
    let state = WebhookState {
        update_tx: queue.sender(),
    };

    // The receiver path is the bot token, mirroring the registered URL.
    let webhook_path = format!("/{}", config.bot_token);
    let app = webhook_router(&webhook_path, state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(addr = %addr, "Webhook ingress listening");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "Webhook server error");
        }
    });

    run_dispatch_loop(update_rx, bot).await;
    Ok(())
}
