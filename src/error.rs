use thiserror::Error;

/// Banner text used when the server gives nothing better to show.
pub const GENERIC_NETWORK_ERROR: &str = "Network error, please try again";

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the message exchange client.
///
/// Every variant is terminal for the operation that produced it; nothing in
/// the client retries on its own. Config and CLI code use `anyhow::Result`
/// for ad-hoc context chains instead.
#[derive(Debug, Error)]
pub enum ClientError {
    // ── Composer input ──────────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Network / HTTP status ───────────────────────────────────────────
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    // ── Response body ───────────────────────────────────────────────────
    #[error("format: {0}")]
    Format(#[from] FormatError),

    // ── Request gate ────────────────────────────────────────────────────
    #[error("a message is already being sent")]
    Busy,
}

impl ClientError {
    /// Text shown in the error banner for this failure.
    ///
    /// Non-success responses surface the server's body verbatim; network and
    /// format failures collapse into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Transport(TransportError::Status { body, .. }) if !body.trim().is_empty() => {
                body.trim().to_string()
            }
            Self::Transport(_) | Self::Format(_) => GENERIC_NETWORK_ERROR.to_string(),
            Self::Busy => self.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ─── Validation errors ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message content is empty")]
    EmptyContent,

    #[error("message type is missing")]
    MissingType,
}

// ─── Transport errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

// ─── Format errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("unrecognized response body: {0}")]
    Unrecognized(String),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
