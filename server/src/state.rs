//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream generation client behind a trait object so route
//! tests can substitute a scripted mock. The relay itself is stateless;
//! nothing here outlives a single request beyond the shared HTTP client.

use std::sync::Arc;

use crate::gemini::Generate;

#[derive(Clone)]
pub struct AppState {
    /// Upstream generation client shared by all requests.
    pub gemini: Arc<dyn Generate>,
}

impl AppState {
    #[must_use]
    pub fn new(gemini: impl Generate + 'static) -> Self {
        Self { gemini: Arc::new(gemini) }
    }
}
