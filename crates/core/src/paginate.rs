//! Grid-sized pagination of filtered results.

use serde::Serialize;

/// Grid dimensions fixed when a session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLayout {
	rows: usize,
	cols: usize,
}

impl PageLayout {
	pub const DEFAULT_ROWS: usize = 5;
	pub const DEFAULT_COLS: usize = 10;
	/// Largest accepted row or column count.
	pub const MAX_DIMENSION: usize = u16::MAX as usize;

	/// Build a layout, replacing absent, non-positive or oversized dimensions
	/// with the defaults.
	#[must_use]
	pub fn new(rows: Option<i64>, cols: Option<i64>) -> Self {
		Self {
			rows: normalize(rows, Self::DEFAULT_ROWS),
			cols: normalize(cols, Self::DEFAULT_COLS),
		}
	}

	#[must_use]
	pub fn rows(&self) -> usize {
		self.rows
	}

	#[must_use]
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Number of icons per page; always at least one.
	#[must_use]
	pub fn page_size(&self) -> usize {
		self.rows.saturating_mul(self.cols)
	}
}

impl Default for PageLayout {
	fn default() -> Self {
		Self {
			rows: Self::DEFAULT_ROWS,
			cols: Self::DEFAULT_COLS,
		}
	}
}

fn normalize(value: Option<i64>, default: usize) -> usize {
	match value {
		Some(value) if value > 0 => usize::try_from(value)
			.ok()
			.filter(|value| *value <= PageLayout::MAX_DIMENSION)
			.unwrap_or(default),
		_ => default,
	}
}

/// One page of a filtered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedResult<T> {
	pub filtered_count: usize,
	pub total_pages: usize,
	/// One-based, always within `1..=total_pages`.
	pub current_page: usize,
	pub visible_items: Vec<T>,
}

impl<T> PagedResult<T> {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.visible_items.is_empty()
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}
}

/// Number of pages needed for `len` items; an empty result still has one page.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
	let page_size = page_size.max(1);
	len.div_ceil(page_size).max(1)
}

/// Clamp a one-based page number into `1..=total_pages`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
	requested.clamp(1, total_pages.max(1))
}

/// Slice `filtered` into the page containing `requested_page`.
///
/// Out-of-range requests are clamped rather than rejected, so the result is
/// always a valid page. A `page_size` of zero is treated as one.
#[must_use]
pub fn paginate<T: Clone>(filtered: &[T], page_size: usize, requested_page: usize) -> PagedResult<T> {
	let page_size = page_size.max(1);
	let total_pages = page_count(filtered.len(), page_size);
	let current_page = clamp_page(requested_page, total_pages);

	let start = (current_page - 1) * page_size;
	let end = (start + page_size).min(filtered.len());
	let visible_items = filtered.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

	PagedResult {
		filtered_count: filtered.len(),
		total_pages,
		current_page,
		visible_items,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layout_normalizes_missing_and_non_positive_dimensions() {
		assert_eq!(PageLayout::new(None, None), PageLayout::default());
		assert_eq!(PageLayout::new(Some(0), Some(-3)).page_size(), 50);

		let layout = PageLayout::new(Some(6), Some(12));
		assert_eq!((layout.rows(), layout.cols()), (6, 12));
		assert_eq!(layout.page_size(), 72);
	}

	#[test]
	fn oversized_dimensions_fall_back_to_defaults() {
		let layout = PageLayout::new(Some(i64::MAX), Some(4));
		assert_eq!((layout.rows(), layout.cols()), (PageLayout::DEFAULT_ROWS, 4));
		assert_eq!(layout.page_size(), 20);

		let layout = PageLayout::new(Some(i64::MAX), Some(i64::MAX));
		assert_eq!(layout, PageLayout::default());

		let widest = PageLayout::MAX_DIMENSION as i64;
		let layout = PageLayout::new(Some(widest), Some(widest));
		assert_eq!(layout.rows(), PageLayout::MAX_DIMENSION);
		assert!(layout.page_size() >= 1);
	}

	#[test]
	fn empty_input_has_a_single_empty_page() {
		let page = paginate::<u32>(&[], 4, 3);
		assert_eq!(page.total_pages, 1);
		assert_eq!(page.current_page, 1);
		assert!(page.is_empty());
		assert_eq!(page.filtered_count, 0);
	}

	#[test]
	fn final_page_may_be_short() {
		let items: Vec<u32> = (0..7).collect();
		let page = paginate(&items, 3, 3);
		assert_eq!(page.total_pages, 3);
		assert_eq!(page.visible_items, vec![6]);
		assert!(!page.has_next());
		assert!(page.has_previous());
	}

	#[test]
	fn out_of_range_requests_are_clamped() {
		let items: Vec<u32> = (0..10).collect();
		assert_eq!(paginate(&items, 4, 0).current_page, 1);
		assert_eq!(paginate(&items, 4, 99).current_page, 3);
		assert_eq!(paginate(&items, 4, 99).visible_items, vec![8, 9]);
	}

	#[test]
	fn pages_partition_the_input() {
		for len in 0..25usize {
			let items: Vec<usize> = (0..len).collect();
			for size in 1..8usize {
				let total = page_count(len, size);
				let mut collected = Vec::new();
				for page in 1..=total {
					let result = paginate(&items, size, page);
					if page < total {
						assert_eq!(result.visible_items.len(), size);
					}
					assert!(result.visible_items.len() <= size);
					collected.extend(result.visible_items);
				}
				assert_eq!(collected, items);
			}
		}
	}
}
