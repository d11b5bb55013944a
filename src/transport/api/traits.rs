use crate::error::ClientError;
use crate::message::{Message, SubmitReceipt};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`MessageApi`] calls.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send + 'a>>;

/// Backend boundary of the message exchange client. Implement for any
/// transport that can list and accept messages.
pub trait MessageApi: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Fetch the whole conversation history, in server order.
    fn fetch_messages(&self) -> ApiFuture<'_, Vec<Message>>;

    /// Submit a new message. `kind` is the composer's raw type selection.
    fn post_message<'a>(&'a self, kind: &'a str, content: &'a str)
    -> ApiFuture<'a, SubmitReceipt>;
}
