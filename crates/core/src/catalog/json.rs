use std::fs;
use std::path::{Path, PathBuf};

use super::{CatalogSource, IconRecord};
use crate::error::CatalogError;

/// Reads the catalog from a JSON array of icon records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
	path: PathBuf,
}

impl JsonFileCatalog {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl CatalogSource for JsonFileCatalog {
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn load(&self) -> Result<Vec<IconRecord>, CatalogError> {
		let contents = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
			path: self.path.clone(),
			source,
		})?;
		serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
			path: self.path.clone(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	#[test]
	fn loads_records_in_file_order() {
		let mut file = NamedTempFile::new().expect("temp file");
		write!(
			file,
			r#"[
				{{"name": "Chart", "category": "Data", "key": "icon-chart"}},
				{{"name": "Home", "category": "General", "key": "icon-home", "tags": ["main"]}}
			]"#
		)
		.expect("write catalog");

		let icons = JsonFileCatalog::new(file.path()).load().expect("load catalog");
		let keys: Vec<_> = icons.iter().map(|icon| icon.key.as_str()).collect();
		assert_eq!(keys, vec!["icon-chart", "icon-home"]);
		assert_eq!(icons[1].tags, Some(vec!["main".to_string()]));
	}

	#[test]
	fn missing_file_reports_io_error() {
		let dir = tempfile::tempdir().expect("temp dir");
		let err = JsonFileCatalog::new(dir.path().join("absent.json"))
			.load()
			.expect_err("missing file should fail");
		assert!(matches!(err, CatalogError::Io { .. }));
	}

	#[test]
	fn malformed_file_reports_parse_error() {
		let mut file = NamedTempFile::new().expect("temp file");
		write!(file, r#"{{"icons": []}}"#).expect("write catalog");

		let err = JsonFileCatalog::new(file.path())
			.load()
			.expect_err("object is not a list of icons");
		assert!(matches!(err, CatalogError::Parse { .. }));
	}
}
