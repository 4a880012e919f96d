//! Category toggles that gate item visibility.
//!
//! A [`Filter`] is bound to exactly one category and is either enabled or
//! disabled. The filters form a fixed list ([`FilterSet`]); only their
//! enabled state changes over time.
//!
//! Hosts that keep filters as marker tokens (`"filter rust disabled"`:
//! kind, category, optional `disabled`) can convert with
//! [`Filter::from_class_list`] and [`Filter::class_list`].

use crate::classlist::ClassList;
use crate::error::{Error, Result};

/// Marker token carried by disabled filters.
pub const DISABLED: &str = "disabled";

/// A named toggle gating visibility by category membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    category: String,
    enabled: bool,
}

impl Filter {
    /// Creates an enabled filter for `category`.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            enabled: true,
        }
    }

    /// Sets the initial enabled state (builder pattern).
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Reads a filter from its marker tokens.
    ///
    /// The category is the second token; the filter is disabled iff the
    /// `disabled` token is present.
    ///
    /// ```rust
    /// use listview_widgets::classlist::ClassList;
    /// use listview_widgets::filter::Filter;
    ///
    /// let filter = Filter::from_class_list(&ClassList::from("filter rust disabled")).unwrap();
    /// assert_eq!(filter.category(), "rust");
    /// assert!(!filter.is_enabled());
    /// ```
    pub fn from_class_list(classes: &ClassList) -> Result<Self> {
        let category = classes.get(1).ok_or_else(|| Error::MissingCategory {
            classes: classes.to_string(),
        })?;
        Ok(Self {
            category: category.to_string(),
            enabled: !classes.contains(DISABLED),
        })
    }

    /// Writes the filter back as marker tokens, `filter <category> [disabled]`.
    pub fn class_list(&self) -> ClassList {
        let mut classes: ClassList = ["filter", self.category.as_str()].into_iter().collect();
        if !self.enabled {
            classes.add_class(DISABLED);
        }
        classes
    }

    /// The category this filter gates.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns true if the filter currently lets its category through.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips between enabled and disabled.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// The fixed, ordered list of filters rendered for a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Wraps filters in display order.
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// Builds a set of enabled filters, one per category.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filters: categories.into_iter().map(Filter::new).collect(),
        }
    }

    /// Toggles the filter for `category`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFilter`] if no filter carries that category.
    pub fn toggle(&mut self, category: &str) -> Result<&Filter> {
        let filter = self
            .filters
            .iter_mut()
            .find(|f| f.category == category)
            .ok_or_else(|| Error::UnknownFilter {
                category: category.to_string(),
            })?;
        filter.toggle();
        Ok(filter)
    }

    /// The filter for `category`, if any.
    pub fn get(&self, category: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.category == category)
    }

    /// Categories of the enabled filters, in list order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.category.as_str())
    }

    /// Iterates the filters in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if there are no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
