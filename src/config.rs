//! Controller configuration.
//!
//! ```rust
//! use listview_widgets::config::Config;
//!
//! let config = Config::from_toml_str("page_size = 25\npagination_regions = 2").unwrap();
//! assert_eq!(config.page_size, 25);
//! assert_eq!(config.pagination_regions, 2);
//!
//! // Missing keys fall back to the defaults.
//! let config = Config::from_toml_str("").unwrap();
//! assert_eq!(config, Config::default());
//! ```

use crate::error::{Error, Result};
use crate::paginator::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Settings of a list view controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page; defaults to 10.
    pub page_size: usize,
    /// Number of pagination widgets that mirror the same controls, e.g. one
    /// above and one below the list.
    pub pagination_regions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pagination_regions: 1,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the items per page (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the number of pagination regions (builder pattern).
    pub fn with_pagination_regions(mut self, regions: usize) -> Self {
        self.pagination_regions = regions;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that page size and region count are positive.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize {
                value: self.page_size,
            });
        }
        if self.pagination_regions == 0 {
            return Err(Error::InvalidRegions {
                value: self.pagination_regions,
            });
        }
        Ok(())
    }
}
