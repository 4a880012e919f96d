#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/listview-widgets/")]

//! # listview-widgets
//!
//! Filterable, searchable and paginated list views for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications and
//! for hosts that render the pagination controls as HTML.
//!
//! ## Overview
//!
//! A list view shows a fixed list of items through three lenses:
//!
//! - **Filters**: category toggles. An item is a candidate when any enabled
//!   filter's category is among its tags.
//! - **Search**: a case-insensitive substring matched against the first line
//!   of each item's title.
//! - **Pages**: the matching items, in order, bucketed ten to a page.
//!
//! Every change to filters or search recomputes all of it from scratch and
//! returns to page 1. The pure building blocks are exposed on their own:
//! [`visibility::compute_visibility`], [`paginator::paginate`] and
//! [`markup::render_pagination`]. [`ListViewController`] ties them together.
//!
//! ## Quick Start
//!
//! ```rust
//! use listview_widgets::prelude::*;
//!
//! let items = vec![
//!     DefaultItem::new("Tokio\nAn asynchronous runtime", ["rust", "async"]),
//!     DefaultItem::new("Gin", ["go", "web"]),
//!     DefaultItem::new("Axum", ["rust", "web"]),
//! ];
//! let mut list = ListViewController::new(items, FilterSet::from_categories(["rust", "go", "web"]));
//!
//! list.set_search("ax");
//! list.update_filterables();
//! assert_eq!(list.visible_items().count(), 1);
//!
//! // The same controls, as HTML for every pagination region.
//! assert_eq!(list.pagination_regions().len(), 1);
//! ```
//!
//! ## Component Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classlist`] | Ordered marker-token sets |
//! | [`filter`] | Category toggles |
//! | [`item`] | The `Item` trait, `DefaultItem`, per-item state |
//! | [`visibility`] | Filter and search evaluation |
//! | [`paginator`] | Page bucketing and page state |
//! | [`markup`] | Pagination controls as HTML or terminal text |
//! | [`controller`] | The list view controller |
//! | [`clipboard`] | Asynchronous copy to the system clipboard |

pub mod classlist;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod item;
pub mod key;
pub mod markup;
pub mod paginator;
pub mod style;
pub mod visibility;

pub use classlist::ClassList;
pub use clipboard::{copy, CopiedMsg, CopyErrMsg};
pub use config::Config;
pub use controller::ListViewController;
pub use error::{Error, Result};
pub use filter::{Filter, FilterSet};
pub use item::{DefaultItem, Item, ItemState};
pub use key::{key_press_helper, Binding, ListViewKeyMap};
pub use markup::{render_pagination, Control, Markup};
pub use paginator::{page_count, paginate, Model as Paginator, PageAssignment};
pub use style::PaginationStyles;
pub use visibility::{compute_visibility, SearchQuery, VisibilitySet};

/// Prelude module for convenient imports.
///
/// ```rust
/// use listview_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classlist::ClassList;
    pub use crate::clipboard::{copy, CopiedMsg, CopyErrMsg};
    pub use crate::config::Config;
    pub use crate::controller::ListViewController;
    pub use crate::filter::{Filter, FilterSet};
    pub use crate::item::{DefaultItem, Item, ItemState};
    pub use crate::key::{key_press_helper, Binding, ListViewKeyMap};
    pub use crate::markup::{render_pagination, Control, Markup};
    pub use crate::paginator::{paginate, Model as Paginator};
    pub use crate::style::PaginationStyles;
    pub use crate::visibility::{compute_visibility, SearchQuery};
}
