//! Presentational components for the chat view.

pub mod chat_panel;
pub mod composer;
