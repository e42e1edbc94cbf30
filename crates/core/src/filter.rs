//! Category and search-term filtering over a catalog.
//!
//! Filtering never reorders: the output is always a subsequence of the input.
//! The category restriction runs first and the search term is matched only
//! within that subset.

use crate::catalog::IconRecord;

/// Category sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// The pair of inputs that narrows a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
	pub category: String,
	pub search_term: String,
}

impl Default for FilterCriteria {
	fn default() -> Self {
		Self {
			category: ALL_CATEGORIES.to_string(),
			search_term: String::new(),
		}
	}
}

impl FilterCriteria {
	#[must_use]
	pub fn new(category: impl Into<String>, search_term: impl Into<String>) -> Self {
		Self {
			category: category.into(),
			search_term: search_term.into(),
		}
	}

	fn matches_category(&self, icon: &IconRecord) -> bool {
		self.category == ALL_CATEGORIES || icon.category == self.category
	}
}

/// Case-insensitive substring matcher over an icon's name and tags.
struct SearchMatcher {
	needle: String,
}

impl SearchMatcher {
	fn new(term: &str) -> Self {
		Self {
			needle: term.to_lowercase(),
		}
	}

	fn matches(&self, icon: &IconRecord) -> bool {
		if self.needle.is_empty() {
			return true;
		}
		icon.name.to_lowercase().contains(&self.needle)
			|| icon
				.tags()
				.any(|tag| tag.to_lowercase().contains(&self.needle))
	}
}

/// Positions in `icons` that satisfy `criteria`, ascending.
#[must_use]
pub fn filter_indices(icons: &[IconRecord], criteria: &FilterCriteria) -> Vec<usize> {
	let matcher = SearchMatcher::new(&criteria.search_term);
	icons
		.iter()
		.enumerate()
		.filter(|(_, icon)| criteria.matches_category(icon))
		.filter(|(_, icon)| matcher.matches(icon))
		.map(|(index, _)| index)
		.collect()
}

/// Icons in `icons` that satisfy `criteria`, in catalog order.
#[must_use]
pub fn filter<'a>(icons: &'a [IconRecord], criteria: &FilterCriteria) -> Vec<&'a IconRecord> {
	filter_indices(icons, criteria)
		.into_iter()
		.map(|index| &icons[index])
		.collect()
}
