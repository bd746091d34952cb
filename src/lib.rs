//! # bbbot
//!
//! Telegram echo bot: updates arrive on a webhook, go through a bounded FIFO
//! queue, and a single dispatch loop echoes each message back to its chat as
//! a reply. [`run_bot`] wires the whole thing; the pieces ([`Bot`],
//! [`UpdateQueue`], [`webhook_router`], [`run_dispatch_loop`]) are public so
//! tests can drive them separately.

pub mod adapters;
pub mod bot;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod queue;
pub mod runner;
pub mod types;
pub mod webhook;

pub use adapters::TelegramUpdateWrapper;
pub use bot::{Bot, TelegramBot};
pub use cli::Cli;
pub use config::BotConfig;
pub use dispatch::run_dispatch_loop;
pub use error::{BbbotError, Result};
pub use logger::init_tracing;
pub use queue::{UpdateQueue, UPDATE_QUEUE_CAPACITY};
pub use runner::run_bot;
pub use types::{Reply, Update};
pub use webhook::{webhook_router, WebhookState};
