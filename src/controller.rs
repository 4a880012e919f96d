//! The list view controller: filters, search, pages and their controls.
//!
//! [`ListViewController`] owns the items, the filter list and the search
//! text, and keeps each item's derived [`ItemState`] in sync with them.
//! Every filter toggle or search submit recomputes visibility and page
//! buckets from scratch and returns to page 1.
//!
//! # Examples
//!
//! ```
//! use listview_widgets::controller::ListViewController;
//! use listview_widgets::filter::FilterSet;
//! use listview_widgets::item::DefaultItem;
//!
//! let items: Vec<DefaultItem> = (1..=25)
//!     .map(|i| DefaultItem::new(format!("Crate {i}"), ["rust"]))
//!     .collect();
//! let mut list = ListViewController::new(items, FilterSet::from_categories(["rust"]));
//! assert_eq!(list.page_count(), 3);
//! assert_eq!(list.visible_items().count(), 10);
//!
//! list.set_next_page();
//! assert_eq!(list.page(), 2);
//!
//! list.toggle_filter("rust").unwrap();
//! assert_eq!(list.visible_items().count(), 0);
//! assert_eq!(list.page_count(), 1);
//! ```

use crate::classlist::ClassList;
use crate::clipboard::{self, CopiedMsg, CopyErrMsg};
use crate::config::Config;
use crate::error::Result;
use crate::filter::FilterSet;
use crate::item::{Item, ItemState};
use crate::key::{key_press_helper, ListViewKeyMap};
use crate::markup::Markup;
use crate::paginator::{self, paginate};
use crate::style::PaginationStyles;
use crate::visibility::{compute_visibility, SearchQuery};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::debug;

/// A filterable, searchable, paginated list.
#[derive(Debug, Clone)]
pub struct ListViewController<I: Item> {
    items: Vec<I>,
    states: Vec<ItemState>,
    filters: FilterSet,
    search: String,
    paginator: paginator::Model,
    markup: Markup,
    regions: Vec<String>,
    config: Config,
    /// Key bindings used by [`ListViewController::update`].
    pub keymap: ListViewKeyMap,
    /// Styles for the terminal view of the pagination controls.
    pub styles: PaginationStyles,
}

impl<I: Item> ListViewController<I> {
    /// Creates a controller with the default configuration and computes
    /// the initial visibility.
    pub fn new(items: Vec<I>, filters: FilterSet) -> Self {
        let config = Config::default();
        let mut controller = Self {
            states: vec![ItemState::default(); items.len()],
            items,
            filters,
            search: String::new(),
            paginator: paginator::Model::new().with_per_page(config.page_size),
            markup: Markup::default(),
            regions: Vec::new(),
            config,
            keymap: ListViewKeyMap::default(),
            styles: PaginationStyles::default(),
        };
        controller.update_filterables();
        controller
    }

    /// Applies `config` and recomputes.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the page size or region count is zero.
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        config.validate()?;
        self.paginator.set_per_page(config.page_size);
        self.config = config;
        self.update_filterables();
        Ok(self)
    }

    /// Flips the filter for `category` and recomputes visibility.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnknownFilter`] if no filter carries that category;
    /// nothing changes in that case.
    pub fn toggle_filter(&mut self, category: &str) -> Result<()> {
        let enabled = self.filters.toggle(category)?.is_enabled();
        debug!(category, enabled, "filter toggled");
        self.update_filterables();
        Ok(())
    }

    /// Replaces the search box text. Takes effect on the next
    /// [`ListViewController::update_filterables`].
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Current search box text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Recomputes visibility and page buckets for every item, then shows
    /// page 1.
    pub fn update_filterables(&mut self) {
        let query = SearchQuery::new(&self.search);
        let visible = compute_visibility(&self.items, &self.filters, &query);
        let assignment = paginate(&visible, self.config.page_size);

        for (index, state) in self.states.iter_mut().enumerate() {
            state.page = assignment.page_of(index);
            state.hidden = !visible.is_visible(index);
        }

        let count = visible.count();
        self.paginator.set_total_items(count);
        debug!(
            visible = count,
            pages = assignment.page_count(),
            query = query.as_str(),
            "filterables updated"
        );
        self.set_page(1, Some(assignment.page_count()));
    }

    /// Shows the items of `page` and rebuilds the pagination controls in
    /// every region.
    ///
    /// `pages` defaults to the page count currently displayed.
    pub fn set_page(&mut self, page: usize, pages: Option<usize>) {
        let pages = pages.unwrap_or(self.paginator.total_pages);

        for state in &mut self.states {
            state.hidden = state.page != Some(page);
        }

        self.paginator.page = page;
        self.paginator.set_total_pages(pages);
        self.markup = self.paginator.view();
        self.regions = vec![self.markup.to_html(); self.config.pagination_regions];
        debug!(page, pages, "page set");
    }

    /// Moves one page back. Does nothing on page 1, unlike the page
    /// helpers this replaces, which stepped to page 0 unconditionally.
    pub fn set_previous_page(&mut self) {
        if self.paginator.on_first_page() {
            return;
        }
        self.set_page(self.paginator.page - 1, None);
    }

    /// Moves one page forward. Does nothing on the last page, unlike the
    /// page helpers this replaces, which stepped past it unconditionally.
    pub fn set_next_page(&mut self) {
        if self.paginator.on_last_page() {
            return;
        }
        self.set_page(self.paginator.page + 1, None);
    }

    /// Creates a command copying `text` to the clipboard.
    pub fn copy(&self, text: impl Into<String>) -> Cmd {
        clipboard::copy(text)
    }

    /// Handles key presses and clipboard results.
    ///
    /// ```
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    /// use listview_widgets::controller::ListViewController;
    /// use listview_widgets::filter::FilterSet;
    /// use listview_widgets::item::DefaultItem;
    ///
    /// let items: Vec<DefaultItem> = (0..30)
    ///     .map(|i| DefaultItem::new(format!("Item {i}"), ["all"]))
    ///     .collect();
    /// let mut list = ListViewController::new(items, FilterSet::from_categories(["all"]));
    ///
    /// list.update(Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE }));
    /// assert_eq!(list.page(), 2);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.prev_page.matches(key_msg) {
                self.set_previous_page();
            } else if self.keymap.next_page.matches(key_msg) {
                self.set_next_page();
            } else {
                let submit_keys = self.keymap.submit_search.keys.clone();
                for key in submit_keys {
                    if key_press_helper(key_msg, key, || self.update_filterables()) {
                        break;
                    }
                }
            }
        } else if let Some(CopiedMsg(text)) = msg.downcast_ref::<CopiedMsg>() {
            debug!(len = text.len(), "copied to clipboard");
        } else if let Some(CopyErrMsg(err)) = msg.downcast_ref::<CopyErrMsg>() {
            debug!(error = %err, "copy failed, ignoring");
        }
        None
    }

    /// Renders the shown items, one per line, followed by the pagination
    /// controls.
    pub fn view(&self) -> String {
        let mut out = String::new();
        for item in self.visible_items() {
            out.push_str(&item.to_string());
            out.push('\n');
        }
        out.push_str(&self.markup.view(&self.styles));
        out
    }

    /// Items currently shown, in item order.
    pub fn visible_items(&self) -> impl Iterator<Item = &I> {
        self.items
            .iter()
            .zip(&self.states)
            .filter(|(_, state)| !state.hidden)
            .map(|(item, _)| item)
    }

    /// Number of items that passed filtering and search, over all pages.
    pub fn matched_count(&self) -> usize {
        self.states.iter().filter(|s| s.page.is_some()).count()
    }

    /// All items, shown or not, in order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Derived state of the item at `index`.
    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        self.states.get(index).copied()
    }

    /// Marker tokens for the item at `index`: its base classes plus the
    /// page number and `hidden` markers.
    pub fn item_classes(&self, index: usize) -> Option<ClassList> {
        let item = self.items.get(index)?;
        let state = self.states.get(index)?;
        Some(state.apply_to(item.base_classes()))
    }

    /// The filter list.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The current page, 1-based.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// The page count currently displayed.
    pub fn page_count(&self) -> usize {
        self.paginator.total_pages
    }

    /// The current pagination controls.
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// HTML of every pagination region; all regions hold the same markup.
    pub fn pagination_regions(&self) -> &[String] {
        &self.regions
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;
    use crate::item::DefaultItem;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn numbered(n: usize, tag: &str) -> Vec<DefaultItem> {
        (1..=n)
            .map(|i| DefaultItem::new(format!("{tag} item {i}"), [tag]))
            .collect()
    }

    fn press(key: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_initial_state_shows_first_page() {
        let list = ListViewController::new(numbered(15, "rust"), FilterSet::from_categories(["rust"]));
        assert_eq!(list.page(), 1);
        assert_eq!(list.page_count(), 2);
        assert_eq!(list.visible_items().count(), 10);
        assert_eq!(list.matched_count(), 15);
        assert_eq!(list.markup().to_string(), "(Prev) [1] 2 Next");
    }

    #[test]
    fn test_exact_multiple_adds_empty_page() {
        let mut list =
            ListViewController::new(numbered(10, "rust"), FilterSet::from_categories(["rust"]));
        assert_eq!(list.page_count(), 2);
        list.set_next_page();
        assert_eq!(list.page(), 2);
        assert_eq!(list.visible_items().count(), 0);
    }

    #[test]
    fn test_toggle_filter_recomputes_and_resets_page() {
        let mut items = numbered(12, "rust");
        items.extend(numbered(5, "go"));
        let mut list = ListViewController::new(items, FilterSet::from_categories(["rust", "go"]));
        list.set_next_page();
        assert_eq!(list.page(), 2);

        list.toggle_filter("rust").unwrap();
        assert_eq!(list.page(), 1);
        assert_eq!(list.matched_count(), 5);
        assert!(list.visible_items().all(|i| i.has_tag("go")));
    }

    #[test]
    fn test_toggle_unknown_filter_leaves_state() {
        let mut list = ListViewController::new(numbered(3, "rust"), FilterSet::from_categories(["rust"]));
        assert!(list.toggle_filter("go").is_err());
        assert_eq!(list.matched_count(), 3);
    }

    #[test]
    fn test_all_filters_disabled_hides_everything() {
        let filters: FilterSet = vec![Filter::new("rust").with_enabled(false)].into_iter().collect();
        let mut list = ListViewController::new(numbered(4, "rust"), filters);
        list.set_search("item");
        list.update_filterables();
        assert_eq!(list.matched_count(), 0);
        assert_eq!(list.markup().to_string(), "(Prev) [1] (Next)");
    }

    #[test]
    fn test_search_applies_on_update() {
        let items = vec![
            DefaultItem::new("Tokio", ["rust"]),
            DefaultItem::new("Rayon", ["rust"]),
        ];
        let mut list = ListViewController::new(items, FilterSet::from_categories(["rust"]));
        list.set_search("TOK");
        assert_eq!(list.visible_items().count(), 2);
        list.update_filterables();
        assert_eq!(
            list.visible_items().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["Tokio"]
        );
    }

    #[test]
    fn test_set_page_defaults_to_displayed_count() {
        let mut list = ListViewController::new(numbered(45, "rust"), FilterSet::from_categories(["rust"]));
        list.set_page(3, None);
        assert_eq!(list.page_count(), 5);
        assert_eq!(list.markup().to_string(), "Prev 1 2 [3] 4 5 Next");
        let titles: Vec<_> = list.visible_items().map(|i| i.title.clone()).collect();
        assert_eq!(titles.first().map(String::as_str), Some("rust item 21"));
        assert_eq!(titles.len(), 10);
    }

    #[test]
    fn test_page_selection_is_exact() {
        let mut list = ListViewController::new(numbered(150, "rust"), FilterSet::from_categories(["rust"]));
        list.set_page(1, None);
        assert_eq!(list.visible_items().count(), 10);
        assert!(list.visible_items().all(|i| list.items()[..10].contains(i)));
    }

    #[test]
    fn test_next_then_previous_round_trip() {
        let mut list = ListViewController::new(numbered(95, "rust"), FilterSet::from_categories(["rust"]));
        list.set_page(4, None);
        list.set_next_page();
        assert_eq!(list.page(), 5);
        list.set_previous_page();
        assert_eq!(list.page(), 4);
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut list = ListViewController::new(numbered(15, "rust"), FilterSet::from_categories(["rust"]));
        list.set_previous_page();
        assert_eq!(list.page(), 1);
        list.set_next_page();
        list.set_next_page();
        assert_eq!(list.page(), 2);
    }

    #[test]
    fn test_regions_mirror_markup() {
        let list = ListViewController::new(numbered(30, "rust"), FilterSet::from_categories(["rust"]))
            .with_config(Config::new().with_pagination_regions(2))
            .unwrap();
        let regions = list.pagination_regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], regions[1]);
        assert_eq!(regions[0], list.markup().to_html());
    }

    #[test]
    fn test_custom_page_size() {
        let list = ListViewController::new(numbered(12, "rust"), FilterSet::from_categories(["rust"]))
            .with_config(Config::new().with_page_size(5))
            .unwrap();
        assert_eq!(list.page_count(), 3);
        assert_eq!(list.visible_items().count(), 5);
    }

    #[test]
    fn test_item_classes_carry_markers() {
        let mut items = numbered(11, "rust");
        items.push(DefaultItem::new("gin", ["go"]));
        let list = ListViewController::new(items, FilterSet::from_categories(["rust"]));
        assert_eq!(list.item_classes(0).unwrap().to_string(), "filterable rust 1");
        assert_eq!(list.item_classes(10).unwrap().to_string(), "filterable rust 2 hidden");
        assert_eq!(list.item_classes(11).unwrap().to_string(), "filterable go hidden");
        assert!(list.item_classes(12).is_none());
    }

    #[test]
    fn test_update_handles_keys() {
        let mut list = ListViewController::new(numbered(25, "rust"), FilterSet::from_categories(["rust"]));
        list.update(press(KeyCode::Char('l')));
        assert_eq!(list.page(), 2);
        list.update(press(KeyCode::PageUp));
        assert_eq!(list.page(), 1);

        list.set_search("item 2");
        list.update(press(KeyCode::Char('x')));
        assert_eq!(list.matched_count(), 25);
        list.update(press(KeyCode::Enter));
        // "item 2" and "item 20".."item 25"
        assert_eq!(list.matched_count(), 7);
    }

    #[test]
    fn test_update_ignores_copy_results() {
        let mut list = ListViewController::new(numbered(3, "rust"), FilterSet::from_categories(["rust"]));
        assert!(list.update(Box::new(CopyErrMsg("denied".to_string()))).is_none());
        assert!(list.update(Box::new(CopiedMsg("x".to_string()))).is_none());
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_view_lists_items_then_controls() {
        let list = ListViewController::new(numbered(2, "rust"), FilterSet::from_categories(["rust"]));
        let plain = strip_ansi_escapes::strip_str(list.view());
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines[0], "rust item 1");
        assert_eq!(lines[1], "rust item 2");
        assert!(lines[2].contains("Prev"));
        assert!(lines[2].contains("Next"));
    }
}
