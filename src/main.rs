//! bbbot binary: load .env, parse flags, run the bot until the process dies.

use anyhow::Result;
use bbbot::{run_bot, BotConfig, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::load(cli.token)?;
    run_bot(config).await
}
