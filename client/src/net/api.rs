//! REST API helper for communicating with the server relay.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error since the relay call is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is deliberately not consulted: relay error bodies carry
//! no `reply` field and flow into the caller's fallback path. Only a
//! request that cannot be sent or a body that cannot be parsed is an
//! error, and the caller surfaces that as a fixed chat message rather than
//! a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use wire::{ChatReply, ChatRequest};

#[cfg(any(test, feature = "hydrate"))]
const CHAT_ENDPOINT: &str = "/api/chat";

/// Send a prompt to `POST /api/chat` and return the optional reply text.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the response
/// body is not parseable as a reply.
pub async fn send_chat_message(message: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
