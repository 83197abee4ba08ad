//! # client
//!
//! Leptos + WASM frontend for the relay chat application.
//!
//! This crate contains the chat page, presentational components, the pure
//! conversation state machine, and the REST helper that talks to the
//! server relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
