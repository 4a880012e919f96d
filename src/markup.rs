//! Pagination control model and its HTML and terminal renderings.
//!
//! [`render_pagination`] decides which controls to show for a page and a
//! page count:
//!
//! - **Prev** is enabled on every page after the first.
//! - **One page**: a single active `1` and a disabled **Next**.
//! - **Fewer than seven pages**: every page number, the current one active.
//! - **Seven or more pages**: when the current page lies strictly between
//!   3 and `pages - 2` the condensed form `1 … p-1 p p+1 … pages` is used,
//!   otherwise the first three and last three pages around an ellipsis.
//! - **Next** is disabled once the current page reaches the page count.
//!
//! # Examples
//!
//! ```rust
//! use listview_widgets::markup::render_pagination;
//!
//! let markup = render_pagination(5, 10);
//! assert_eq!(markup.to_string(), "Prev 1 … 4 [5] 6 … 10 Next");
//! assert_eq!(markup.active_page(), Some(5));
//! ```

use crate::style::{PaginationStyles, ELLIPSIS};
use std::fmt;

/// Page counts from this value up use the condensed layouts.
pub const CONDENSE_THRESHOLD: usize = 7;

/// A single entry of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The "Prev" button.
    Prev {
        /// Whether the button is clickable.
        enabled: bool,
    },
    /// A page number; the active one is not clickable.
    Page {
        /// The 1-based page number shown.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// A gap between page ranges.
    Ellipsis,
    /// The "Next" button.
    Next {
        /// Whether the button is clickable.
        enabled: bool,
    },
}

impl Control {
    fn page(number: usize, current: usize) -> Self {
        Control::Page {
            number,
            active: number == current,
        }
    }

    /// The control as one `<li>` element.
    pub fn to_html(&self) -> String {
        match *self {
            Control::Prev { enabled: true } => {
                r#"<li><a class="button small" onclick="setPreviousPage()">Prev</a></li>"#.to_string()
            }
            Control::Prev { enabled: false } => {
                r#"<li><a class="button small disabled">Prev</a></li>"#.to_string()
            }
            Control::Next { enabled: true } => {
                r#"<li><a class="button small" onclick="setNextPage()">Next</a></li>"#.to_string()
            }
            Control::Next { enabled: false } => {
                r#"<li><a class="button small disabled">Next</a></li>"#.to_string()
            }
            Control::Page {
                number,
                active: true,
            } => format!(r#"<li><a class="page active">{number}</a></li>"#),
            Control::Page {
                number,
                active: false,
            } => format!(r#"<li><a class="page" onclick="setPage({number})">{number}</a></li>"#),
            Control::Ellipsis => "<li><span>&hellip;</span></li>".to_string(),
        }
    }
}

/// The full set of pagination controls, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    controls: Vec<Control>,
}

impl Markup {
    /// The controls in display order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The active page number, if one is shown.
    pub fn active_page(&self) -> Option<usize> {
        self.controls.iter().find_map(|c| match c {
            Control::Page {
                number,
                active: true,
            } => Some(*number),
            _ => None,
        })
    }

    /// The highest page number shown, which is the page count.
    pub fn last_page_label(&self) -> Option<usize> {
        self.controls.iter().rev().find_map(|c| match c {
            Control::Page { number, .. } => Some(*number),
            _ => None,
        })
    }

    /// Page numbers that can be clicked, in display order.
    pub fn clickable_pages(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|c| match c {
                Control::Page {
                    number,
                    active: false,
                } => Some(*number),
                _ => None,
            })
            .collect()
    }

    /// The controls as HTML list items, ready to replace the contents of a
    /// pagination region.
    ///
    /// ```rust
    /// use listview_widgets::markup::render_pagination;
    ///
    /// assert_eq!(
    ///     render_pagination(1, 1).to_html(),
    ///     concat!(
    ///         r#"<li><a class="button small disabled">Prev</a></li>"#,
    ///         r#"<li><a class="page active">1</a></li>"#,
    ///         r#"<li><a class="button small disabled">Next</a></li>"#,
    ///     )
    /// );
    /// ```
    pub fn to_html(&self) -> String {
        self.controls.iter().map(Control::to_html).collect()
    }

    /// Renders the controls for a terminal with the given styles.
    pub fn view(&self, styles: &PaginationStyles) -> String {
        self.controls
            .iter()
            .map(|c| match *c {
                Control::Prev { enabled } | Control::Next { enabled } => {
                    let label = if matches!(c, Control::Prev { .. }) {
                        "Prev"
                    } else {
                        "Next"
                    };
                    if enabled {
                        styles.button.clone().render(label)
                    } else {
                        styles.disabled_button.clone().render(label)
                    }
                }
                Control::Page { number, active } => {
                    let label = number.to_string();
                    if active {
                        styles.active_page.clone().render(&label)
                    } else {
                        styles.page.clone().render(&label)
                    }
                }
                Control::Ellipsis => styles.ellipsis.clone().render(ELLIPSIS),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Plain text form: the active page in brackets, disabled buttons in
/// parentheses.
impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .controls
            .iter()
            .map(|c| match *c {
                Control::Prev { enabled: true } => "Prev".to_string(),
                Control::Prev { enabled: false } => "(Prev)".to_string(),
                Control::Next { enabled: true } => "Next".to_string(),
                Control::Next { enabled: false } => "(Next)".to_string(),
                Control::Page {
                    number,
                    active: true,
                } => format!("[{number}]"),
                Control::Page {
                    number,
                    active: false,
                } => number.to_string(),
                Control::Ellipsis => ELLIPSIS.to_string(),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Builds the pagination controls for `page` of `pages`.
pub fn render_pagination(page: usize, pages: usize) -> Markup {
    let mut controls = vec![Control::Prev { enabled: page > 1 }];

    if pages == 1 {
        controls.push(Control::Page {
            number: 1,
            active: true,
        });
        controls.push(Control::Next { enabled: false });
        return Markup { controls };
    }

    if pages < CONDENSE_THRESHOLD {
        controls.extend((1..=pages).map(|n| Control::page(n, page)));
    } else if page > 3 && page < pages - 2 {
        controls.push(Control::page(1, page));
        controls.push(Control::Ellipsis);
        controls.extend((page - 1..=page + 1).map(|n| Control::page(n, page)));
        controls.push(Control::Ellipsis);
        controls.push(Control::page(pages, page));
    } else {
        controls.extend((1..=3).map(|n| Control::page(n, page)));
        controls.push(Control::Ellipsis);
        controls.extend((pages - 2..=pages).map(|n| Control::page(n, page)));
    }

    controls.push(Control::Next {
        enabled: page < pages,
    });
    Markup { controls }
}
