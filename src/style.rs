//! Terminal styles for the pagination controls.
//!
//! Built on lipgloss. The defaults use `AdaptiveColor` so the controls stay
//! readable on light and dark terminals.
//!
//! ```rust
//! use listview_widgets::style::PaginationStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = PaginationStyles::default();
//! styles.active_page = Style::new().bold(true).underline(true);
//! ```

use lipgloss_extras::prelude::*;

/// Ellipsis shown between page ranges in terminal views.
pub const ELLIPSIS: &str = "…";

/// Styles applied to each kind of pagination control.
#[derive(Debug, Clone)]
pub struct PaginationStyles {
    /// Clickable page numbers.
    pub page: Style,
    /// The current page number.
    pub active_page: Style,
    /// Enabled Prev/Next buttons.
    pub button: Style,
    /// Disabled Prev/Next buttons.
    pub disabled_button: Style,
    /// The gap marker between page ranges.
    pub ellipsis: Style,
}

impl Default for PaginationStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            button: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            disabled_button: Style::new().foreground(subdued_color.clone()),
            ellipsis: Style::new().foreground(subdued_color),
        }
    }
}
