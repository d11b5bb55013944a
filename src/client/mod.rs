pub mod composer;
pub mod gate;
pub mod notifier;
pub mod renderer;
pub mod session;
pub mod validator;

pub use composer::Composer;
pub use gate::{ControlState, GateGuard, RequestGate, SEND_LABEL, SENDING_LABEL};
pub use notifier::{Banner, DEFAULT_DISMISS_AFTER, Notifier};
pub use renderer::{MessageBlock, Renderer, Side};
pub use session::{ChatSession, SessionOptions, SessionView};
pub use validator::validate;
