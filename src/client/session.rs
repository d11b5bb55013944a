//! One activation of the chat client: load once, then submit one message at
//! a time.

use super::composer::Composer;
use super::gate::{ControlState, RequestGate};
use super::notifier::{Banner, DEFAULT_DISMISS_AFTER, Notifier};
use super::renderer::{MessageBlock, Renderer};
use super::validator;
use crate::config::Config;
use crate::error::{ClientError, Result, ValidationError};
use crate::message::{Conversation, IdentityContext, Message, MessageId, MessageType, SubmitReceipt};
use crate::transport::MessageApi;
use crate::ui::Surface;
use chrono::{SecondsFormat, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub default_type: String,
    pub dismiss_after: Duration,
    pub viewport_rows: usize,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_type: config.composer.default_type.clone(),
            dismiss_after: config.notifier.dismiss_after(),
            viewport_rows: config.composer.viewport_rows,
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_type: "text".into(),
            dismiss_after: DEFAULT_DISMISS_AFTER,
            viewport_rows: 20,
        }
    }
}

/// Everything a front end needs to draw, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Newest first; drawn above the messages.
    pub banners: Vec<Banner>,
    pub blocks: Vec<MessageBlock>,
    pub scroll_top: usize,
    pub control: ControlState,
}

pub struct ChatSession {
    api: Arc<dyn MessageApi>,
    identity: IdentityContext,
    renderer: Mutex<Renderer>,
    composer: Mutex<Composer>,
    gate: RequestGate,
    notifier: Notifier,
}

impl ChatSession {
    pub fn new(
        api: Arc<dyn MessageApi>,
        identity: IdentityContext,
        surface: Arc<dyn Surface>,
        options: SessionOptions,
    ) -> Self {
        Self {
            api,
            renderer: Mutex::new(Renderer::new(
                identity.clone(),
                Arc::clone(&surface),
                options.viewport_rows,
            )),
            identity,
            composer: Mutex::new(Composer::new(options.default_type)),
            gate: RequestGate::new(Arc::clone(&surface)),
            notifier: Notifier::new(surface, options.dismiss_after),
        }
    }

    /// Fetch the history and replace whatever is rendered.
    ///
    /// On failure a banner is shown and the rendered list is left alone.
    pub async fn load(&self) -> Result<Conversation> {
        info!(api = self.api.name(), "conversation.load");
        match self.api.fetch_messages().await {
            Ok(messages) => {
                let conversation = Conversation::from(messages);
                info!(count = conversation.len(), "conversation.loaded");
                self.renderer().replace_all(conversation.clone());
                Ok(conversation)
            }
            Err(err) => {
                warn!(error = %err, "conversation.load_failed");
                self.notifier.report(err.user_message());
                Err(err)
            }
        }
    }

    /// `true` when the fields may be submitted. Otherwise one banner is shown.
    pub fn validate(&self, kind: &str, content: &str) -> bool {
        self.check(kind, content).is_ok()
    }

    /// Validate, send, and append the confirmed message.
    ///
    /// Refused with [`ClientError::Busy`] while another submission is in
    /// flight. The composer's text is cleared only on success.
    pub async fn submit(&self, kind: &str, content: &str) -> Result<Message> {
        self.check(kind, content)?;

        let Some(_guard) = self.gate.engage() else {
            debug!("gate.busy");
            return Err(ClientError::Busy);
        };

        info!(kind, "message.submit");
        let receipt = match self.api.post_message(kind, content).await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, "message.submit_failed");
                self.notifier.report(err.user_message());
                return Err(err);
            }
        };

        let message = self.confirm(kind, content, receipt)?;
        info!(id = %message.id(), "message.submitted");
        self.renderer().append(message.clone());
        self.composer().clear_content();
        Ok(message)
    }

    /// Submit whatever is currently in the composer.
    pub async fn submit_draft(&self) -> Result<Message> {
        let (kind, content) = {
            let composer = self.composer();
            (composer.kind().to_string(), composer.content().to_string())
        };
        self.submit(&kind, &content).await
    }

    pub fn set_draft(&self, content: impl Into<String>) {
        self.composer().set_content(content);
    }

    pub fn set_kind(&self, kind: impl Into<String>) {
        self.composer().set_kind(kind);
    }

    pub fn draft(&self) -> Composer {
        self.composer().clone()
    }

    pub fn conversation(&self) -> Conversation {
        self.renderer().conversation().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn identity(&self) -> &IdentityContext {
        &self.identity
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn view(&self) -> SessionView {
        let renderer = self.renderer();
        SessionView {
            banners: self.notifier.active(),
            blocks: renderer.blocks(),
            scroll_top: renderer.scroll_top(),
            control: self.gate.control(),
        }
    }

    fn check(&self, kind: &str, content: &str) -> std::result::Result<(), ValidationError> {
        validator::validate(kind, content).inspect_err(|err| {
            debug!(reason = %err, "message.rejected");
            self.notifier.report(err.to_string());
        })
    }

    /// Build the local copy of a message the server accepted. Missing id or
    /// timestamp fall back to a pending id and the local clock.
    fn confirm(
        &self,
        kind: &str,
        content: &str,
        receipt: SubmitReceipt,
    ) -> std::result::Result<Message, ValidationError> {
        let id = receipt.id.map_or_else(MessageId::pending, MessageId::Assigned);
        let timestamp = receipt
            .timestamp
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        Message::new(
            id,
            content,
            MessageType::parse(kind),
            self.identity.user_id().clone(),
            timestamp,
        )
    }

    fn renderer(&self) -> MutexGuard<'_, Renderer> {
        self.renderer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn composer(&self) -> MutexGuard<'_, Composer> {
        self.composer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
