pub mod types;
pub mod wire;

pub use types::{Conversation, IdentityContext, Message, MessageId, MessageType, UserId};
pub use wire::{ApiRevision, SubmitReceipt, parse_history, parse_receipt};
