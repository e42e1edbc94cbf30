use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionPhase;

/// Failures raised while a [`CatalogSource`](crate::catalog::CatalogSource) loads icons.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read icon catalog '{}'", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog file was read but is not a valid list of icons.
	#[error("icon catalog '{}' is not valid JSON", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A custom source reported a failure of its own.
	#[error("icon catalog source failed: {0}")]
	Source(String),
}

impl CatalogError {
	pub fn source_failure(message: impl Into<String>) -> Self {
		Self::Source(message.into())
	}
}

/// Errors surfaced by [`PickerSession`](crate::session::PickerSession) operations.
///
/// Rejected navigation and redundant category changes are not errors; they
/// are reported as [`Transition::Ignored`](crate::session::Transition::Ignored).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
	/// The session already reached a terminal phase and cannot be reused.
	#[error("picker session is {phase} and no longer accepts selections")]
	InvalidSessionState { phase: SessionPhase },

	/// The operation requires a loaded catalog.
	#[error("picker session is {phase}; the catalog is not ready")]
	NotReady { phase: SessionPhase },

	/// The requested icon is not on the visible page.
	#[error("icon '{key}' is not on the visible page")]
	NotVisible { key: String },
}
