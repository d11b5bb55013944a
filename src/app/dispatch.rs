use crate::cli::{Cli, Commands};
use crate::client::{ChatSession, SessionOptions};
use crate::message::{IdentityContext, UserId};
use crate::transport::HttpMessageApi;
use crate::ui::TerminalSurface;
use crate::Config;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use super::chat;
use super::status::render_status;

/// Wire a terminal session from config: HTTP backend, injected identity,
/// terminal surface.
pub fn build_session(config: &Config) -> Result<ChatSession> {
    let user_id = config
        .identity
        .user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .context(
            "No user id configured. Pass --user-id, set CHATLINE_USER_ID, \
             or add `user_id` under [identity] in config.toml",
        )?;
    let api = HttpMessageApi::from_config(&config.api)
        .with_context(|| format!("Invalid api.base_url: {}", config.api.base_url))?;
    info!(endpoint = %api.messages_url(), revision = %api.revision(), "session.start");

    Ok(ChatSession::new(
        Arc::new(api),
        IdentityContext::new(UserId::from(user_id)),
        Arc::new(TerminalSurface::new()),
        SessionOptions::from_config(config),
    ))
}

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(user_id) = cli.user_id {
        config.identity.user_id = Some(user_id);
    }
    config.validate()?;

    match cli.command {
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }

        Commands::Show => {
            let session = build_session(&config)?;
            session
                .load()
                .await
                .context("Failed to load conversation")?;
            Ok(())
        }

        Commands::Send { kind, content } => {
            let session = build_session(&config)?;
            let kind = kind.unwrap_or_else(|| config.composer.default_type.clone());
            session
                .submit(&kind, &content.join(" "))
                .await
                .context("Failed to send message")?;
            Ok(())
        }

        Commands::Chat => {
            let session = build_session(&config)?;
            chat::run(&session).await
        }
    }
}
