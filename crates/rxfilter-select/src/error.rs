//! Error types for board profiles

use thiserror::Error;

use crate::board::BoardVariant;

/// Errors that can occur while building or loading a board profile
#[derive(Debug, Error)]
pub enum BoardError {
    /// Failed to read a profile file
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Profile is not valid JSON or is missing fields
    #[error("invalid board profile: {0}")]
    Json(#[from] serde_json::Error),

    /// More fitted IDs than the board has filter sites
    #[error("{variant} has {max} filter sites but {given} fitted IDs were given")]
    TooManySites {
        variant: BoardVariant,
        given: usize,
        max: usize,
    },

    /// Text is not a filter ID
    #[error("invalid filter ID: {0}")]
    InvalidFilterId(String),

    /// Text does not name a board variant
    #[error("unknown board variant: {0}")]
    UnknownVariant(String),
}
