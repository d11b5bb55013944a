#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod transport;
pub mod ui;

pub use client::{ChatSession, SessionOptions, SessionView};
pub use config::Config;
pub use error::{ClientError, FormatError, TransportError, ValidationError};
pub use message::{ApiRevision, Conversation, IdentityContext, Message, MessageId, MessageType, UserId};
pub use transport::{HttpMessageApi, MessageApi};
