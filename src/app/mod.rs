pub mod chat;
pub mod dispatch;
pub mod status;

pub use dispatch::{build_session, dispatch};
