use crate::client::{Banner, ControlState, MessageBlock};
use std::sync::Mutex;

/// Drawing target for the client. Implement for any UI toolkit.
///
/// The client core only pushes state changes; a surface never calls back.
pub trait Surface: Send + Sync {
    /// Redraw the whole message list.
    fn replace_blocks(&self, blocks: &[MessageBlock]);

    /// Draw one more block at the end of the list.
    fn append_block(&self, block: &MessageBlock);

    /// Index of the first block that should be visible.
    fn scroll_to(&self, _top: usize) {}

    /// Show an error banner above the list.
    fn show_banner(&self, banner: &Banner);

    fn dismiss_banner(&self, _id: u64) {}

    /// Submit control enabled/disabled and its label.
    fn control_changed(&self, _state: ControlState) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Replaced(Vec<MessageBlock>),
    Appended(MessageBlock),
    Scrolled(usize),
    BannerShown(Banner),
    BannerDismissed(u64),
    Control(ControlState),
}

/// Headless surface that records every call, in order.
#[derive(Debug, Default)]
pub struct MemorySurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Texts of every banner shown so far.
    pub fn banner_texts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::BannerShown(banner) => Some(banner.text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SurfaceEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Surface for MemorySurface {
    fn replace_blocks(&self, blocks: &[MessageBlock]) {
        self.record(SurfaceEvent::Replaced(blocks.to_vec()));
    }

    fn append_block(&self, block: &MessageBlock) {
        self.record(SurfaceEvent::Appended(block.clone()));
    }

    fn scroll_to(&self, top: usize) {
        self.record(SurfaceEvent::Scrolled(top));
    }

    fn show_banner(&self, banner: &Banner) {
        self.record(SurfaceEvent::BannerShown(banner.clone()));
    }

    fn dismiss_banner(&self, id: u64) {
        self.record(SurfaceEvent::BannerDismissed(id));
    }

    fn control_changed(&self, state: ControlState) {
        self.record(SurfaceEvent::Control(state));
    }
}
