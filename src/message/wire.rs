//! Ingestion boundary for the messages API.
//!
//! Backend revisions disagree on field names (`user_id` vs `uid`,
//! `timestamp` vs `datetime`, `content` vs `message-content`). Every record is
//! normalized here so the rest of the client only sees [`Message`].

use super::types::{Message, MessageId, MessageType, UserId};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Backend revision the client talks to.
///
/// Reading tolerates either revision's field names; the revision only picks
/// the endpoint path, the form key used when posting, and how a plain-text
/// receipt is read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ApiRevision {
    /// `/messages`, `uid`, `datetime`, form key `content`, plain-text receipt.
    Legacy,
    /// `/api/messages`, JSON receipts, form key `message-content`.
    #[default]
    Current,
}

impl ApiRevision {
    /// Path of the messages resource, relative to the backend origin.
    pub fn messages_path(self) -> &'static str {
        match self {
            Self::Legacy => "/messages",
            Self::Current => "/api/messages",
        }
    }

    pub fn content_field(self) -> &'static str {
        match self {
            Self::Legacy => "content",
            Self::Current => "message-content",
        }
    }

    /// Form body for a new message, in wire order.
    pub fn submission_form<'a>(
        self,
        kind: &'a str,
        content: &'a str,
    ) -> [(&'static str, &'a str); 2] {
        [("type", kind), (self.content_field(), content)]
    }
}

/// Integer-or-string value; the backend serializes ids both ways.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Int(i64),
    Text(String),
}

impl WireScalar {
    fn into_string(self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }

    fn into_message_type(self) -> MessageType {
        match self {
            Self::Int(code) => MessageType::from_code(code),
            Self::Text(name) => MessageType::parse(&name),
        }
    }

    fn into_non_empty(self) -> Option<String> {
        let value = self.into_string();
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    #[serde(default, alias = "mid", alias = "message_id")]
    id: Option<WireScalar>,
    #[serde(default, alias = "message-content")]
    content: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<WireScalar>,
    #[serde(default, alias = "user_id", alias = "uid", alias = "authorId")]
    author_id: Option<WireScalar>,
    #[serde(default, alias = "datetime")]
    timestamp: Option<String>,
}

impl WireMessage {
    fn normalize(self, index: usize) -> Result<Message, FormatError> {
        let invalid = |reason: &str| FormatError::InvalidRecord {
            index,
            reason: reason.to_string(),
        };

        let id = self
            .id
            .and_then(WireScalar::into_non_empty)
            .ok_or_else(|| invalid("missing id"))?;
        let author = self
            .author_id
            .and_then(WireScalar::into_non_empty)
            .map_or_else(UserId::unknown, UserId::new);
        let kind = self
            .kind
            .map(WireScalar::into_message_type)
            .ok_or_else(|| invalid("missing type"))?;

        Message::new(
            MessageId::Assigned(id),
            self.content.unwrap_or_default(),
            kind,
            author,
            self.timestamp.unwrap_or_default(),
        )
        .map_err(|err| invalid(&err.to_string()))
    }
}

/// `GET /api/messages` body. `status` and `count` are ignored.
#[derive(Debug, Deserialize)]
struct HistoryEnvelope {
    #[serde(default)]
    messages: Option<Vec<WireMessage>>,
}

/// Parse a history response into messages, preserving server order.
///
/// A single malformed record rejects the whole payload.
pub fn parse_history(body: &str) -> Result<Vec<Message>, FormatError> {
    let envelope: HistoryEnvelope = serde_json::from_str(body)?;
    envelope
        .messages
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.normalize(index))
        .collect()
}

/// What the server tells us after accepting a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub id: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireReceipt {
    #[serde(default, alias = "message_id", alias = "mid")]
    id: Option<WireScalar>,
    #[serde(default, alias = "datetime")]
    timestamp: Option<String>,
}

const LEGACY_RECEIPT_PREFIX: &str = "Message sent with ID:";

/// Parse a submission response body.
///
/// Legacy backends answer with `Message sent with ID: <n>` instead of JSON.
pub fn parse_receipt(body: &str, revision: ApiRevision) -> Result<SubmitReceipt, FormatError> {
    match serde_json::from_str::<WireReceipt>(body) {
        Ok(receipt) => Ok(SubmitReceipt {
            id: receipt.id.and_then(WireScalar::into_non_empty),
            timestamp: receipt.timestamp.filter(|ts| !ts.trim().is_empty()),
        }),
        Err(err) if revision == ApiRevision::Legacy => body
            .trim()
            .strip_prefix(LEGACY_RECEIPT_PREFIX)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| SubmitReceipt {
                id: Some(id.to_string()),
                timestamp: None,
            })
            .ok_or_else(|| {
                tracing::debug!(error = %err, "receipt.not_json");
                FormatError::Unrecognized(body.trim().to_string())
            }),
        Err(err) => Err(err.into()),
    }
}
