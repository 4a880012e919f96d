//! Error type shared by the list view components.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the list view components.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter was addressed by a category no filter carries.
    #[error("no filter for category: {category}")]
    UnknownFilter {
        /// The category that was looked up.
        category: String,
    },

    /// The configured page size was zero.
    #[error("invalid page_size {value}, expected positive integer")]
    InvalidPageSize {
        /// The rejected value.
        value: usize,
    },

    /// The configured number of pagination regions was zero.
    #[error("invalid pagination_regions {value}, expected positive integer")]
    InvalidRegions {
        /// The rejected value.
        value: usize,
    },

    /// A filter's marker tokens did not carry a category.
    #[error("filter markers have no category token: {classes:?}")]
    MissingCategory {
        /// The marker tokens as read.
        classes: String,
    },

    /// The TOML configuration could not be parsed.
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Writing to the system clipboard failed.
    #[error("clipboard write failed: {message}")]
    Clipboard {
        /// Reason reported by the clipboard backend.
        message: String,
    },
}
