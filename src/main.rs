#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use chatline::Config;
use chatline::cli::Cli;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };

    // Initialize logging; stdout belongs to the conversation.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log.max_level()
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    chatline::app::dispatch(cli, config).await
}
