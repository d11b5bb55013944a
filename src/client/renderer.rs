use crate::message::{Conversation, IdentityContext, Message};
use crate::ui::Surface;
use std::sync::Arc;
use strum::{Display, IntoStaticStr};

/// Which side of the conversation a block sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Mine,
    Theirs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub side: Side,
    pub message: Message,
}

impl MessageBlock {
    pub fn text(&self) -> &str {
        self.message.content()
    }
}

/// Owns the conversation and projects it onto a [`Surface`].
///
/// After every mutation the viewport follows the tail.
pub struct Renderer {
    identity: IdentityContext,
    conversation: Conversation,
    viewport_rows: usize,
    scroll_top: usize,
    surface: Arc<dyn Surface>,
}

impl Renderer {
    pub fn new(identity: IdentityContext, surface: Arc<dyn Surface>, viewport_rows: usize) -> Self {
        Self {
            identity,
            conversation: Conversation::new(),
            viewport_rows: viewport_rows.max(1),
            scroll_top: 0,
            surface,
        }
    }

    pub fn replace_all(&mut self, conversation: Conversation) {
        self.conversation = conversation;
        self.surface.replace_blocks(&self.blocks());
        self.follow_tail();
    }

    pub fn append(&mut self, message: Message) {
        let block = self.block_for(&message);
        self.conversation.push(message);
        self.surface.append_block(&block);
        self.follow_tail();
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn blocks(&self) -> Vec<MessageBlock> {
        self.conversation
            .iter()
            .map(|message| self.block_for(message))
            .collect()
    }

    /// Index of the first visible block.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    fn block_for(&self, message: &Message) -> MessageBlock {
        let side = if self.identity.is_author_of(message) {
            Side::Mine
        } else {
            Side::Theirs
        };
        MessageBlock {
            side,
            message: message.clone(),
        }
    }

    fn follow_tail(&mut self) {
        self.scroll_top = self.conversation.len().saturating_sub(self.viewport_rows);
        self.surface.scroll_to(self.scroll_top);
    }
}
