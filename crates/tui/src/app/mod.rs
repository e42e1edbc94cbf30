//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type wraps a picker session with its UI state. Supporting
//! modules partition the implementation into focused pieces: actions (input
//! handling) and rendering.

mod actions;
mod render;
mod state;

pub use state::App;
