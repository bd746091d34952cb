//! Bot configuration loaded from environment variables.
//!
//! Required: `TELEGRAM_BBBOT_TOKEN`, `TELEGRAM_BBBOT_URL`, `PORT`.
//! Optional: `TELEGRAM_API_URL` (or `TELOXIDE_API_URL`), `LOG_FILE`.

use anyhow::Result;
use std::env;

/// Runtime configuration: credentials, callback URL, listen port, logging.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token; also the path the webhook route is mounted on.
    pub bot_token: String,
    /// Public callback URL registered with Telegram via `setWebhook`.
    pub webhook_url: String,
    /// Port the HTTP ingress listens on.
    pub port: u16,
    /// Override for the Telegram API base URL (tests point this at a mock).
    pub telegram_api_url: Option<String>,
    /// Log file path; directory is created at startup.
    pub log_file: String,
}

impl BotConfig {
    /// Loads configuration from the environment. A token passed in (from the
    /// CLI) takes precedence over `TELEGRAM_BBBOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BBBOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BBBOT_TOKEN not set"))?,
        };
        let webhook_url = env::var("TELEGRAM_BBBOT_URL")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_BBBOT_URL not set"))?;
        let port = env::var("PORT")
            .map_err(|_| anyhow::anyhow!("PORT not set"))?
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT is not a valid port number: {}", e))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/bbbot.log".to_string());

        Ok(Self {
            bot_token,
            webhook_url,
            port,
            telegram_api_url,
            log_file,
        })
    }

    /// Checks that configured URLs actually parse. Called once at startup.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.webhook_url).is_err() {
            anyhow::bail!(
                "TELEGRAM_BBBOT_URL is not a valid URL: {}",
                self.webhook_url
            );
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
