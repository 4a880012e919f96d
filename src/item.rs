//! Filterable items and their derived per-item state.
//!
//! Implement [`Item`] for your own type, or use [`DefaultItem`] which
//! carries a title, a set of tags and the base marker classes it should
//! keep when rendered. The controller pairs each item with an
//! [`ItemState`] that is recomputed on every filter or search change.
//!
//! # Examples
//!
//! ```
//! use listview_widgets::item::{DefaultItem, Item};
//!
//! let item = DefaultItem::new("Tokio\nAsync runtime", ["rust", "async"]);
//! assert_eq!(item.search_line(), "tokio");
//! assert!(item.has_tag("async"));
//! ```

use crate::classlist::ClassList;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Marker token carried by items that are not shown.
pub const HIDDEN: &str = "hidden";

/// Trait for items that can be filtered by category and searched by title.
pub trait Item: Display + Clone {
    /// The item's display title. Only its first line is searched.
    fn title(&self) -> &str;

    /// Returns true if the item belongs to `category`.
    fn has_tag(&self, category: &str) -> bool;

    /// Base marker classes of the item, before any derived markers.
    fn base_classes(&self) -> ClassList {
        ClassList::from("filterable")
    }

    /// The lowercased first line of the title, the text search runs on.
    fn search_line(&self) -> String {
        first_line(self.title()).to_lowercase()
    }
}

fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}

/// A simple item with a title and a tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultItem {
    /// Display title; may span several lines.
    pub title: String,
    /// Categories the item belongs to.
    pub tags: BTreeSet<String>,
}

impl DefaultItem {
    /// Creates an item with the given title and tags.
    pub fn new<I, S>(title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", first_line(&self.title))
    }
}

impl Item for DefaultItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn has_tag(&self, category: &str) -> bool {
        self.tags.contains(category)
    }

    fn base_classes(&self) -> ClassList {
        std::iter::once("filterable")
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }
}

/// Derived, transient state of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    /// 1-based page the item was bucketed into; `None` when filtered out.
    pub page: Option<usize>,
    /// Whether the item is currently not shown.
    pub hidden: bool,
}

impl ItemState {
    /// Renders the state as marker tokens on top of `base`: stale numeric
    /// markers are stripped, the page number is appended and `hidden` is
    /// set or cleared.
    ///
    /// ```
    /// use listview_widgets::classlist::ClassList;
    /// use listview_widgets::item::ItemState;
    ///
    /// let state = ItemState { page: Some(2), hidden: false };
    /// let classes = state.apply_to(ClassList::from("filterable rust 1 hidden"));
    /// assert_eq!(classes.to_string(), "filterable rust 2");
    /// ```
    pub fn apply_to(&self, mut base: ClassList) -> ClassList {
        base.remove_number_classes();
        if let Some(page) = self.page {
            base.add_class(page.to_string());
        }
        if self.hidden {
            base.add_class(HIDDEN);
        } else {
            base.remove_class(HIDDEN);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_line_uses_first_line_only() {
        let item = DefaultItem::new("Serde\r\nSerialization framework", ["rust"]);
        assert_eq!(item.search_line(), "serde");
        assert_eq!(item.to_string(), "Serde");
    }

    #[test]
    fn test_base_classes_include_tags() {
        let item = DefaultItem::new("Axum", ["web", "rust"]);
        assert_eq!(item.base_classes().to_string(), "filterable rust web");
    }

    #[test]
    fn test_hidden_state_markers() {
        let state = ItemState {
            page: None,
            hidden: true,
        };
        let classes = state.apply_to(ClassList::from("filterable go 3"));
        assert_eq!(classes.to_string(), "filterable go hidden");
    }
}
