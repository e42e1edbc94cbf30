//! Icon records and the sources that supply them.
//!
//! A [`Catalog`] is the immutable, ordered list of icons a picker session
//! browses. Sources implement [`CatalogSource`]; the [`CatalogCache`] service
//! wraps one source and keeps the first successful load for the lifetime of
//! the process.

mod builtin;
mod cache;
mod json;

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use builtin::BuiltinCatalog;
pub use cache::{CatalogCache, LoadCompletion, LoadTicket, spawn_load};
pub use json::JsonFileCatalog;

use crate::error::CatalogError;

/// A single selectable icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
	/// Display name, searched case-insensitively.
	pub name: String,
	/// Category the icon belongs to.
	pub category: String,
	/// Stable identifier used for selection and rendering.
	pub key: String,
	/// Extra search terms.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
}

impl IconRecord {
	#[must_use]
	pub fn new(
		name: impl Into<String>,
		category: impl Into<String>,
		key: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			category: category.into(),
			key: key.into(),
			tags: None,
		}
	}

	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = Some(tags.into_iter().map(Into::into).collect());
		self
	}

	/// Iterate over the tags, yielding nothing when the icon has none.
	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.tags.iter().flatten().map(String::as_str)
	}
}

/// Ordered, immutable icon list shared between sessions.
///
/// Cloning only bumps a reference count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	icons: Arc<[IconRecord]>,
}

impl Catalog {
	#[must_use]
	pub fn new(icons: Vec<IconRecord>) -> Self {
		Self {
			icons: icons.into(),
		}
	}

	#[must_use]
	pub fn icons(&self) -> &[IconRecord] {
		&self.icons
	}

	/// Distinct category values in first-seen order.
	#[must_use]
	pub fn categories(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		self.icons
			.iter()
			.filter(|icon| seen.insert(icon.category.as_str()))
			.map(|icon| icon.category.clone())
			.collect()
	}
}

impl Deref for Catalog {
	type Target = [IconRecord];

	fn deref(&self) -> &Self::Target {
		&self.icons
	}
}

impl From<Vec<IconRecord>> for Catalog {
	fn from(icons: Vec<IconRecord>) -> Self {
		Self::new(icons)
	}
}

/// Supplier of the full icon list.
///
/// Implementations may block; the [`CatalogCache`] calls `load` at most once
/// per successful result.
pub trait CatalogSource: Send + Sync {
	/// Short human-readable description used in logs.
	fn describe(&self) -> String;

	/// Produce every icon the picker may offer.
	fn load(&self) -> Result<Vec<IconRecord>, CatalogError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn categories_are_distinct_and_keep_first_seen_order() {
		let catalog = Catalog::new(vec![
			IconRecord::new("User", "People", "icon-user"),
			IconRecord::new("Home", "General", "icon-home"),
			IconRecord::new("Team", "People", "icon-team"),
			IconRecord::new("Chart", "Data", "icon-chart"),
		]);

		assert_eq!(catalog.categories(), vec!["People", "General", "Data"]);
	}

	#[test]
	fn tags_iterator_is_empty_without_tags() {
		let icon = IconRecord::new("User", "People", "icon-user");
		assert_eq!(icon.tags().count(), 0);

		let tagged = icon.with_tags(["person", "account"]);
		assert_eq!(tagged.tags().collect::<Vec<_>>(), vec!["person", "account"]);
	}

	#[test]
	fn records_deserialize_without_tags() {
		let icon: IconRecord =
			serde_json::from_str(r#"{"name":"User","category":"People","key":"icon-user"}"#)
				.expect("parse icon");
		assert_eq!(icon.tags, None);
		assert_eq!(icon.key, "icon-user");
	}
}
