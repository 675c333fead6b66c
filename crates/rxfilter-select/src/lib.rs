//! RX Filter Site Selection
//!
//! Picks the filter site of an RF board to use for a requested channel:
//!
//! - **Selector**: frequency-only and band-constrained selection over the
//!   filters fitted to a board
//! - **Direction**: forward/reverse path swap applied to every selection
//! - **Limits**: passband edge and hardware identifier queries
//! - **Board**: board variants and JSON board profiles
//!
//! # Example
//!
//! ```rust
//! use rxfilter_bands::Direction;
//! use rxfilter_select::FilterSelector;
//!
//! let selector = FilterSelector::default();
//! // GSM850 duplexor at site 1, nothing at site 0
//! let fitted = [0xFF, 0x19];
//!
//! let selection = selector.select_by_frequency(&fitted, fitted.len(), 881_500, 200).unwrap();
//! assert_eq!(selection.site, 1);
//! assert_eq!(selection.direction, Direction::Downlink);
//! ```

pub mod board;
pub mod direction;
pub mod error;
pub mod limits;
pub mod selector;

pub use board::{parse_filter_id, BoardProfile, BoardVariant, FittedFilterIds, UNPOPULATED_SITE};
pub use direction::{hint_branch, resolve_direction};
pub use error::BoardError;
pub use limits::{high_limit, ladon_filter_id, low_limit};
pub use selector::{FilterSelector, Selection};
