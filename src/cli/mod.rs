use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `chatline` - message exchange client for a minimal chat backend.
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(version)]
#[command(about = "Load a conversation and send messages to a chat backend.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.chatline/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Your user id (decides which messages are shown as yours)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Backend origin, e.g. http://127.0.0.1:8080
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the conversation, print it, and exit
    Show,

    /// Send one message and exit
    Send {
        /// Message type (text, image, file)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Message content
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Interactive session: load once, then send each line you type
    Chat,

    /// Show effective configuration
    Status,
}
