//! Page bucketing and pagination state for filtered lists.
//!
//! Visible items are assigned to pages of a fixed size in item order. The
//! page count for `n` visible items is `n / page_size + 1`, which leaves a
//! trailing empty page when `n` is an exact multiple of the page size
//! (10 visible items give 2 pages, the second one empty). Hosts rely on
//! that count, so it is kept as is.
//!
//! The [`Model`] holds the current page and page count and produces the
//! pagination controls through [`render_pagination`].

use crate::markup::{render_pagination, Markup};
use crate::visibility::VisibilitySet;

/// Number of items per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages for `visible` items, including the trailing page.
///
/// ```rust
/// use listview_widgets::paginator::page_count;
///
/// assert_eq!(page_count(0, 10), 1);
/// assert_eq!(page_count(9, 10), 1);
/// assert_eq!(page_count(10, 10), 2);
/// assert_eq!(page_count(25, 10), 3);
/// ```
pub fn page_count(visible: usize, page_size: usize) -> usize {
    visible / page_size.max(1) + 1
}

/// Page numbers assigned to items by [`paginate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAssignment {
    pages: Vec<Option<usize>>,
    page_count: usize,
}

impl PageAssignment {
    /// The 1-based page of the item at `index`, `None` if it is not visible.
    pub fn page_of(&self, index: usize) -> Option<usize> {
        self.pages.get(index).copied().flatten()
    }

    /// Total number of pages, see [`page_count`].
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Indices of the items on `page`, in item order.
    pub fn items_on_page(&self, page: usize) -> impl Iterator<Item = usize> + '_ {
        self.pages
            .iter()
            .enumerate()
            .filter_map(move |(i, p)| (*p == Some(page)).then_some(i))
    }

    /// Per-item pages, in item order.
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.pages.iter().copied()
    }
}

/// Buckets visible items into pages of `page_size`.
///
/// A running counter over visible items gives each one the page
/// `counter / page_size + 1`; hidden items get no page.
///
/// ```rust
/// use listview_widgets::paginator::paginate;
/// use listview_widgets::visibility::VisibilitySet;
///
/// let visible: VisibilitySet = [true, false, true, true].into_iter().collect();
/// let pages = paginate(&visible, 2);
/// assert_eq!(pages.page_of(0), Some(1));
/// assert_eq!(pages.page_of(1), None);
/// assert_eq!(pages.page_of(2), Some(1));
/// assert_eq!(pages.page_of(3), Some(2));
/// assert_eq!(pages.page_count(), 2);
/// ```
pub fn paginate(visible: &VisibilitySet, page_size: usize) -> PageAssignment {
    let page_size = page_size.max(1);
    let mut counter = 0;
    let pages = (0..visible.len())
        .map(|index| {
            if visible.is_visible(index) {
                let page = counter / page_size + 1;
                counter += 1;
                Some(page)
            } else {
                None
            }
        })
        .collect();

    PageAssignment {
        pages,
        page_count: page_count(counter, page_size),
    }
}

/// Pagination state: the current page and the number of pages.
///
/// Pages are 1-based, matching the numbers shown in the controls.
///
/// # Examples
///
/// ```rust
/// use listview_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(35);
/// assert_eq!(paginator.total_pages, 4);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The current page, 1-based.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            total_pages: 1,
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 of 1 with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page count from the number of visible items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page. Values less than 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Calculates the page count from the number of visible items, using
    /// [`page_count`].
    ///
    /// ```rust
    /// use listview_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    /// paginator.set_total_items(20);
    /// assert_eq!(paginator.total_pages, 3);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = page_count(items, self.per_page);
    }

    /// Sets the page count directly.
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages;
    }

    /// Moves to the previous page; stays put on page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves to the next page; stays put on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true once the page reaches the page count.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// The pagination controls for the current state.
    pub fn view(&self) -> Markup {
        render_pagination(self.page, self.total_pages)
    }
}
