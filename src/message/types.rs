use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;
use strum::EnumString;
use uuid::Uuid;

/// Category of a message.
///
/// The backend knows `text`, `image` and `file` (integer codes 1..=3).
/// Anything else is carried through as `Other` so newer categories still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MessageType {
    Text,
    Image,
    File,
    #[strum(default)]
    Other(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::File => "file",
            Self::Other(name) => name,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Text,
            2 => Self::Image,
            3 => Self::File,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse a composer selection. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::from_str(trimmed).unwrap_or_else(|_| Self::Other(trimmed.to_string()))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a message.
///
/// `Pending` marks a message the server confirmed without echoing an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    Assigned(String),
    Pending(Uuid),
}

impl MessageId {
    pub fn assigned(id: impl Into<String>) -> Self {
        Self::Assigned(id.into())
    }

    pub fn pending() -> Self {
        Self::Pending(Uuid::new_v4())
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(id) => f.write_str(id),
            Self::Pending(local) => write!(f, "pending-{local}"),
        }
    }
}

/// Opaque user identifier. Numeric ids from the wire are kept in decimal form.
///
/// An empty id stands for an author the backend did not name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unknown() -> Self {
        Self(String::new())
    }

    pub fn is_unknown(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The current user, as far as this client is concerned.
///
/// Only used to tell "mine" from "theirs" when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    user_id: UserId,
}

impl IdentityContext {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Unknown authors are never "mine", whatever the identity.
    pub fn is_author_of(&self, message: &Message) -> bool {
        !message.author_id().is_unknown() && message.author_id() == &self.user_id
    }
}

/// A single chat message. Content is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    content: String,
    kind: MessageType,
    author_id: UserId,
    timestamp: String,
}

impl Message {
    pub fn new(
        id: MessageId,
        content: impl Into<String>,
        kind: MessageType,
        author_id: UserId,
        timestamp: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if kind.as_str().trim().is_empty() {
            return Err(ValidationError::MissingType);
        }
        Ok(Self {
            id,
            content,
            kind,
            author_id,
            timestamp: timestamp.into(),
        })
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> &MessageType {
        &self.kind
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// ISO-8601 timestamp, as sent by the server or stamped locally.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Ordered, client-local view of exchanged messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
