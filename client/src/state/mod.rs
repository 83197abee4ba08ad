//! Client application state modules.
//!
//! ARCHITECTURE
//! ============
//! State lives in plain structs with pure transition methods so the
//! conversation logic is unit-testable without a rendering environment.
//! Pages wrap them in `RwSignal`s and provide them via context.

pub mod chat;
