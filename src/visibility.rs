//! Visibility of items under the current filters and search text.
//!
//! An item is visible when at least one enabled filter's category is
//! among its tags and its search line contains the query. The check runs
//! per enabled filter, so with no filter enabled every item is hidden,
//! whatever the query.

use crate::filter::FilterSet;
use crate::item::Item;

/// A case-insensitive substring query over item titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Creates a query from raw search box text.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// The lowercased query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns true if the item's search line contains the query.
    pub fn matches<I: Item>(&self, item: &I) -> bool {
        item.search_line().contains(&self.needle)
    }
}

/// Per-item visibility flags, in item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    visible: Vec<bool>,
}

impl VisibilitySet {
    /// Returns true if the item at `index` is visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Number of visible items.
    pub fn count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Indices of the visible items, in item order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
    }

    /// Number of items evaluated.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns true if no items were evaluated.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl FromIterator<bool> for VisibilitySet {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            visible: iter.into_iter().collect(),
        }
    }
}

/// Evaluates every item against the enabled filters and the query.
///
/// ```
/// use listview_widgets::filter::FilterSet;
/// use listview_widgets::item::DefaultItem;
/// use listview_widgets::visibility::{compute_visibility, SearchQuery};
///
/// let items = vec![
///     DefaultItem::new("Tokio", ["rust"]),
///     DefaultItem::new("Gin", ["go"]),
/// ];
/// let filters = FilterSet::from_categories(["rust"]);
/// let visible = compute_visibility(&items, &filters, &SearchQuery::new("TOK"));
/// assert!(visible.is_visible(0));
/// assert!(!visible.is_visible(1));
/// ```
pub fn compute_visibility<I: Item>(
    items: &[I],
    filters: &FilterSet,
    query: &SearchQuery,
) -> VisibilitySet {
    items
        .iter()
        .map(|item| {
            filters
                .enabled_categories()
                .any(|category| item.has_tag(category) && query.matches(item))
        })
        .collect()
}
