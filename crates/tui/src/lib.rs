//! Interactive terminal host for `iconpick` sessions.
//!
//! The [`App`] opens a picker session, loads its catalog in the background,
//! and renders category tabs, a search prompt and the icon grid until the
//! user picks an icon or closes the dialog.

mod app;
mod components;
mod config;
pub mod input;
mod runtime;
mod style;

pub use app::App;
pub use runtime::run;

pub use crate::input::QueryInput;
