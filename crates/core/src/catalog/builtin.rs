use super::{CatalogSource, IconRecord};
use crate::error::CatalogError;

/// Default icon set used when no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
	#[must_use]
	pub fn icons() -> Vec<IconRecord> {
		vec![
			IconRecord::new("Home", "General", "icon-home").with_tags(["main", "page"]),
			IconRecord::new("Settings", "General", "icon-settings")
				.with_tags(["config", "options"]),
			IconRecord::new("User", "People", "icon-user"),
			IconRecord::new("Chart", "Data", "icon-chart"),
		]
	}
}

impl CatalogSource for BuiltinCatalog {
	fn describe(&self) -> String {
		"builtin".to_string()
	}

	fn load(&self) -> Result<Vec<IconRecord>, CatalogError> {
		Ok(Self::icons())
	}
}
