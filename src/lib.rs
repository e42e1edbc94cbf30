//! Crate exports for embedding the `iconpick` picker.
//!
//! The root module re-exports the session model from `iconpick-core` and the
//! terminal host from `iconpick-tui` so that embedders can open a picker
//! without digging through the workspace crates.

pub mod app_dirs;
pub mod logging;

pub use iconpick_core::{
	ALL_CATEGORIES, BuiltinCatalog, Catalog, CatalogCache, CatalogError, CatalogSource,
	DialogHost, IconRecord, JsonFileCatalog, PageLayout, PagedResult, PickerError, PickerOutcome,
	PickerSession, PickerView, SEARCH_QUIET_WINDOW, SelectionSink, SessionOptions, SessionPhase,
	Transition,
};
pub use iconpick_tui::{App, run};
