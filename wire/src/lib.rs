//! Shared chat API contract between `server` and `client`.
//!
//! This crate owns the JSON shapes exchanged over `POST /api/chat` so the
//! relay handler and the browser client cannot drift apart. It carries no
//! behavior beyond serialization.


use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The prompt text to forward upstream.
    ///
    /// Defaults to empty when the field is absent so validation reports a
    /// missing message instead of failing at the deserialization layer.
    #[serde(default)]
    pub message: String,
}

/// Success body for `POST /api/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The upstream reply text. Omitted entirely when the upstream produced
    /// no reply; the client renders its fallback message in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// Error body for 4xx/5xx relay responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Fixed, caller-safe error description.
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
