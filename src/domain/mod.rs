//! Domain layer for the coin list core.
//!
//! Core types independent of transport, storage and presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Fetch and crate-level error types
//! - [`item`]: The crypto item record and its category
//! - [`filter`]: Filter predicates and the active filter set
//!
//! # Examples
//!
//! ```
//! use coinlist::domain::{CryptoType, FilterPredicate, Item};
//!
//! let item = Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin);
//! assert!(FilterPredicate::IsCoin.matches(&item));
//! ```

pub mod error;
pub mod filter;
pub mod item;

pub use error::{CoinListError, FetchError, Result};
pub use filter::{FilterAction, FilterPredicate, FilterSet};
pub use item::{dedup_items, fold_case, CryptoType, Item};

/// Loading status gating the presentation.
///
/// Independent of whether the item collection is empty: `Success` with no
/// items is an empty list, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    Success,
    Error(String),
}
