//! Command-line interface. Flags only; the bot has a single behavior and the
//! rest of the configuration comes from the environment.

use clap::Parser;

#[derive(Parser)]
#[command(name = "bbbot")]
#[command(about = "Telegram echo bot: webhook in, echo reply out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token (overrides TELEGRAM_BBBOT_TOKEN).
    #[arg(short, long)]
    pub token: Option<String>,
}
