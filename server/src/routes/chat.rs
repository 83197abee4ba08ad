//! Chat relay route — forwards a prompt to the generation upstream.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};
use wire::{ChatReply, ChatRequest, ErrorBody};

use crate::state::AppState;

/// 400 body when the prompt is absent or empty.
pub const ERR_MESSAGE_REQUIRED: &str = "Message is required";
/// 500 body for any upstream transport or parse failure.
pub const ERR_UPSTREAM: &str = "Error calling Gemini API";

/// `POST /api/chat` — validate the prompt, relay it upstream, return the
/// reply.
///
/// Upstream failures collapse to a fixed 500 body; internal error detail
/// stays in the server log.
pub async fn send_message(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(ERR_MESSAGE_REQUIRED))).into_response();
    }

    info!(prompt_len = req.message.len(), "chat: prompt received");

    match state.gemini.generate(&req.message).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply { reply })).into_response(),
        Err(e) => {
            warn!(error = %e, "chat: upstream call failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(ERR_UPSTREAM))).into_response()
        }
    }
}
