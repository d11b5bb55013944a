use crate::client::ChatSession;
use crate::ui::style;
use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    SwitchType(&'a str),
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed == "/quit" || trimmed == "/exit" {
        return Input::Quit;
    }
    if let Some(kind) = trimmed.strip_prefix("/type")
        && (kind.is_empty() || kind.starts_with(char::is_whitespace))
    {
        return Input::SwitchType(kind.trim());
    }
    Input::Message(line)
}

/// Interactive loop: load once, then one submission per stdin line.
///
/// Failures are already on screen as banners, so they never end the loop.
pub async fn run(session: &ChatSession) -> Result<()> {
    println!("{}", style::header("chatline"));
    if let Err(err) = session.load().await {
        debug!(error = %err, "chat.load_failed");
    }
    println!(
        "{}",
        style::dim("Type a message and press Enter. /type <name> switches type, /quit leaves.")
    );

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::SwitchType(kind) => {
                session.set_kind(kind);
                println!("{}", style::dim(format!("type: {kind}")));
            }
            Input::Message(text) => {
                session.set_draft(text);
                if let Err(err) = session.submit_draft().await {
                    debug!(error = %err, "chat.submit_failed");
                }
            }
        }
    }
    Ok(())
}
