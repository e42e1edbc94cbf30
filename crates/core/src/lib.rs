//! State machine and data model behind the `iconpick` browser.
//!
//! A catalog of [`IconRecord`]s is narrowed by category and a debounced
//! search term, cut into pages sized to the caller's grid, and finally
//! committed back to the dialog that opened the picker. The root module
//! re-exports the types embedders need so they don't have to walk the
//! module hierarchy.

pub mod catalog;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod session;
pub mod sink;
pub mod view;

pub use catalog::{
	BuiltinCatalog, Catalog, CatalogCache, CatalogSource, IconRecord, JsonFileCatalog,
	LoadCompletion, LoadTicket, spawn_load,
};
pub use debounce::{Debouncer, SEARCH_QUIET_WINDOW};
pub use error::{CatalogError, PickerError};
pub use filter::{ALL_CATEGORIES, FilterCriteria, filter, filter_indices};
pub use paginate::{PageLayout, PagedResult, clamp_page, page_count, paginate};
pub use session::{PickerSession, SessionOptions, SessionPhase, Transition};
pub use sink::{DialogHost, PickerOutcome, SelectionSink};
pub use view::PickerView;
