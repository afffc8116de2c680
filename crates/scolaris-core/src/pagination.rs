//! Pagination controller for console tables

/// Pagination configuration
///
/// Tracks the page size and the current page (1-indexed). Recomputed against
/// the filtered record count on every view change; the displayed page is
/// always clamped into `[1, total_pages]`.
#[derive(Debug, Clone)]
pub struct Paginator {
	/// Number of items per page
	per_page: usize,
	/// Current page number (1-indexed)
	current_page: usize,
}

/// Width of the sliding window of page numbers shown in the pager
const PAGE_WINDOW: usize = 5;

impl Paginator {
	/// Creates a new paginator starting on page 1
	pub fn new(per_page: usize) -> Self {
		Self {
			per_page: per_page.max(1),
			current_page: 1,
		}
	}

	/// Returns the page size
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Returns the current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the total number of pages for `total_items`
	///
	/// Always at least 1, even for an empty record set.
	pub fn total_pages(&self, total_items: usize) -> usize {
		total_items.div_ceil(self.per_page).max(1)
	}

	/// Sets the current page, clamped to `[1, total_pages]`
	pub fn set_page(&mut self, page: usize, total_items: usize) {
		self.current_page = page.max(1).min(self.total_pages(total_items));
	}

	/// Changes the page size and resets to page 1
	///
	/// Resetting prevents landing on an out-of-range page after the page
	/// count changes.
	pub fn set_per_page(&mut self, per_page: usize) {
		self.per_page = per_page.max(1);
		self.current_page = 1;
	}

	/// Resets to page 1
	///
	/// Called whenever an upstream filter or search change shrinks the
	/// filtered set.
	pub fn reset(&mut self) {
		self.current_page = 1;
	}

	/// Slices the filtered record set into the current page
	pub fn paginate<'a, T>(&self, filtered: &'a [T]) -> PageView<'a, T> {
		let total_items = filtered.len();
		let total_pages = self.total_pages(total_items);
		let current_page = self.current_page.max(1).min(total_pages);

		let start = (current_page - 1) * self.per_page;
		let end = (start + self.per_page).min(total_items);
		let items = if start < total_items {
			&filtered[start..end]
		} else {
			&[]
		};

		PageView {
			items,
			current_page,
			total_pages,
			total_items,
			has_prev: current_page > 1,
			has_next: current_page < total_pages,
			window: page_window(current_page, total_pages),
		}
	}
}

/// One computed page of the filtered record set
#[derive(Debug)]
pub struct PageView<'a, T> {
	/// Records on the current page, in input order
	pub items: &'a [T],
	/// Current page, clamped into `[1, total_pages]`
	pub current_page: usize,
	/// Total number of pages; at least 1
	pub total_pages: usize,
	/// Number of filtered records across all pages
	pub total_items: usize,
	/// False when on the first page
	pub has_prev: bool,
	/// False when on the last page
	pub has_next: bool,
	/// Sliding window of page numbers centered on the current page
	pub window: Vec<usize>,
}

/// Computes the fixed-width window of page numbers around `current`
///
/// The window is centered on the current page and clamped to
/// `[1, total_pages]`, shrinking only when fewer pages exist than the window
/// width.
fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
	let width = PAGE_WINDOW.min(total_pages);
	let half = PAGE_WINDOW / 2;
	let start = current
		.saturating_sub(half)
		.max(1)
		.min(total_pages - width + 1);
	(start..start + width).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 10, 1)]
	#[case(1, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(95, 10, 10)]
	fn test_total_pages(#[case] items: usize, #[case] per_page: usize, #[case] expected: usize) {
		let paginator = Paginator::new(per_page);
		assert_eq!(paginator.total_pages(items), expected);
	}

	#[test]
	fn test_paginate_slices_current_page() {
		let data: Vec<usize> = (0..25).collect();
		let mut paginator = Paginator::new(10);
		paginator.set_page(3, data.len());

		let page = paginator.paginate(&data);
		assert_eq!(page.items, &[20, 21, 22, 23, 24]);
		assert_eq!(page.total_pages, 3);
		assert!(page.has_prev);
		assert!(!page.has_next);
	}

	#[test]
	fn test_empty_set_still_shows_one_page() {
		let data: Vec<usize> = Vec::new();
		let paginator = Paginator::new(10);
		let page = paginator.paginate(&data);
		assert_eq!(page.total_pages, 1);
		assert_eq!(page.current_page, 1);
		assert!(page.items.is_empty());
		assert!(!page.has_prev);
		assert!(!page.has_next);
	}

	#[test]
	fn test_set_per_page_resets_to_first_page() {
		let mut paginator = Paginator::new(10);
		paginator.set_page(5, 100);
		assert_eq!(paginator.current_page(), 5);

		paginator.set_per_page(25);
		assert_eq!(paginator.current_page(), 1);
	}

	#[test]
	fn test_page_clamped_after_shrink() {
		let mut paginator = Paginator::new(10);
		paginator.set_page(5, 100);

		// The filtered set shrank; the view clamps rather than going blank
		let data: Vec<usize> = (0..12).collect();
		let page = paginator.paginate(&data);
		assert_eq!(page.current_page, 2);
		assert_eq!(page.items, &[10, 11]);
	}

	#[rstest]
	#[case(1, 10, vec![1, 2, 3, 4, 5])]
	#[case(5, 10, vec![3, 4, 5, 6, 7])]
	#[case(10, 10, vec![6, 7, 8, 9, 10])]
	#[case(2, 3, vec![1, 2, 3])]
	#[case(1, 1, vec![1])]
	fn test_page_window(#[case] current: usize, #[case] total: usize, #[case] expected: Vec<usize>) {
		assert_eq!(page_window(current, total), expected);
	}
}
