use serde::Serialize;

use crate::catalog::IconRecord;
use crate::paginate::PagedResult;

/// Everything a presentation layer needs to draw a ready session.
///
/// A fresh snapshot is produced after every accepted transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
	pub page: PagedResult<IconRecord>,
	/// Category vocabulary, starting with the "all" sentinel.
	pub categories: Vec<String>,
	pub category: String,
	/// Committed (debounced) search term.
	pub search_term: String,
}

impl PickerView {
	/// Position of the active category within [`categories`](Self::categories).
	#[must_use]
	pub fn category_index(&self) -> usize {
		self.categories
			.iter()
			.position(|category| *category == self.category)
			.unwrap_or(0)
	}

	#[must_use]
	pub fn visible(&self) -> &[IconRecord] {
		&self.page.visible_items
	}
}
