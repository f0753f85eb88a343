use std::fmt;

use serde::Deserialize;

/// Identifier tying an engine event back to its transcript placeholder.
/// The core mints these; the engine only carries them through.
pub type MessageId = String;

/// Parsed prediction payload from the gateway's `bot` field. The source and
/// title lists are index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PredictionReply {
    pub result: String,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default)]
    pub title: Vec<String>,
}

/// Envelope the gateway wraps around the upstream body.
#[derive(Debug, Deserialize)]
pub(crate) struct GatewayEnvelope {
    pub bot: PredictionReply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Replied { id: MessageId, reply: PredictionReply },
    Failed { id: MessageId, error: GatewayError },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: FailureKind,
    pub message: String,
}

impl GatewayError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    /// A nominally-200 response whose body did not parse as a reply.
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed body"),
        }
    }
}
