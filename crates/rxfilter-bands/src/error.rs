//! Error types for catalog lookups and parsing

use thiserror::Error;

/// Errors that can occur while querying the filter catalog
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Filter index is past the end of the catalog
    #[error("filter index {index} out of range (catalog has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// Text does not name a band filter type
    #[error("unknown band filter: {0}")]
    UnknownBandName(String),

    /// Text does not name a duplexor direction
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}
