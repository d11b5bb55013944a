use super::Surface;
use super::style;
use crate::client::{Banner, ControlState, MessageBlock, Side};
use chrono::{DateTime, Local};
use tracing::debug;

/// Surface that prints to the terminal: messages on stdout, banners on stderr.
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn replace_blocks(&self, blocks: &[MessageBlock]) {
        if blocks.is_empty() {
            println!("{}", style::dim("(no messages yet)"));
        }
        for block in blocks {
            println!("{}", format_block(block));
        }
    }

    fn append_block(&self, block: &MessageBlock) {
        println!("{}", format_block(block));
    }

    fn scroll_to(&self, top: usize) {
        // the terminal follows the tail by itself
        debug!(top, "surface.scroll");
    }

    fn show_banner(&self, banner: &Banner) {
        eprintln!("{} {}", style::error("!"), style::error(&banner.text));
    }

    fn control_changed(&self, state: ControlState) {
        if !state.enabled {
            eprintln!("{}", style::dim(state.label));
        }
    }
}

/// One line per message: who, when, what.
pub fn format_block(block: &MessageBlock) -> String {
    let timestamp = block.message.timestamp();
    let time = if timestamp.trim().is_empty() {
        String::new()
    } else {
        format!(" {}", style::dim(format!("({})", display_time(timestamp))))
    };
    let content = block.message.content();
    let author = block.message.author_id();
    let who = match block.side {
        Side::Mine => style::value("You"),
        Side::Theirs if author.is_unknown() => style::cyan("Someone"),
        Side::Theirs => style::cyan(format!("User {author}")),
    };
    format!("{who}{time}  {content}")
}

/// Local wall-clock time for RFC 3339 timestamps; anything else verbatim.
pub fn display_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
