//! Networking modules for the chat relay API.

pub mod api;
