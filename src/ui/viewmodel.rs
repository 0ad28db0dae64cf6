//! View model types representing the renderable item list screen.
//!
//! View models are immutable snapshots computed from a [`ListEngine`] with
//! [`ListViewModel::compute`]. They carry display-ready data only: row icons,
//! badges, search highlight ranges, chip states and the header title.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinlist::ui::ListViewModel;
//!
//! let vm = ListViewModel::compute(&engine);
//! println!("{}", vm.header.title);
//! for row in &vm.rows {
//!     println!("{} ({})", row.name, row.symbol);
//! }
//! ```

use crate::app::ListEngine;
use crate::domain::{fold_case, CryptoType, DisplayState, Item};

/// Complete view model of the item list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// One row per displayed item, in list order.
    ///
    /// Empty while loading. In the error state these are the stale rows
    /// recovered from the cache, if any.
    pub rows: Vec<DisplayRow>,

    /// Filter chips in canonical order.
    pub filter_chips: Vec<FilterChip>,

    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// True while the first load is in flight.
    pub loading: bool,

    /// Error message to raise as an alert.
    pub alert: Option<String>,

    /// Shown when a successful load leaves nothing to display.
    pub empty_state: Option<EmptyState>,
}

/// Display information for one item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub symbol: String,

    /// Whether the "new" badge is shown.
    pub is_new: bool,

    pub icon: RowIcon,

    /// Character ranges of `name` matching the search phrase.
    ///
    /// Each tuple is `(start, end)` in char indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Icon shown in front of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// Item is not active, whatever its type.
    Inactive,
    Coin,
    Token,
    /// Active item of an unrecognised type.
    None,
}

impl RowIcon {
    #[must_use]
    pub fn for_item(item: &Item) -> Self {
        if !item.is_active {
            return Self::Inactive;
        }
        match item.kind {
            CryptoType::Coin => Self::Coin,
            CryptoType::Token => Self::Token,
            CryptoType::Unknown => Self::None,
        }
    }
}

/// A toggleable filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title including the displayed item count.
    pub title: String,
}

/// Current search field contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl ListViewModel {
    /// Computes the view model from the engine's current outputs.
    #[must_use]
    pub fn compute(engine: &ListEngine) -> Self {
        let display_state = engine.display_state();
        let phrase = engine.search_phrase();

        let rows: Vec<DisplayRow> = match display_state {
            DisplayState::Success | DisplayState::Error(_) => engine
                .items()
                .iter()
                .map(|item| DisplayRow {
                    name: item.name.clone(),
                    symbol: item.symbol.clone(),
                    is_new: item.is_new,
                    icon: RowIcon::for_item(item),
                    highlight_ranges: highlight_ranges(&item.name, phrase),
                })
                .collect(),
            DisplayState::Loading => Vec::new(),
        };

        let filter_chips = engine
            .filter_labels()
            .iter()
            .map(|label| FilterChip {
                label: label.clone(),
                is_active: engine
                    .active_filters()
                    .predicates()
                    .iter()
                    .any(|p| p.label() == label.as_str()),
            })
            .collect();

        let empty_state = (display_state == DisplayState::Success && rows.is_empty())
            .then(|| empty_state_for(engine));

        let alert = match &display_state {
            DisplayState::Error(message) => Some(message.clone()),
            DisplayState::Loading | DisplayState::Success => None,
        };

        Self {
            header: HeaderInfo {
                title: format!(" Crypto Coins ({}) ", rows.len()),
            },
            rows,
            filter_chips,
            search_bar: SearchBarInfo {
                query: phrase.to_string(),
            },
            loading: display_state == DisplayState::Loading,
            alert,
            empty_state,
        }
    }
}

fn empty_state_for(engine: &ListEngine) -> EmptyState {
    if engine.all_items().is_empty() {
        EmptyState {
            message: "No coins available".to_string(),
            subtitle: "Pull to refresh and try again".to_string(),
        }
    } else {
        EmptyState {
            message: "No matching coins".to_string(),
            subtitle: "Change the search or clear the filters".to_string(),
        }
    }
}

/// Finds non-overlapping, case-insensitive occurrences of `phrase` in `name`.
///
/// Matching runs on the case-folded name; each folded char remembers the
/// index of the name char it came from, so ranges are in `name` chars.
fn highlight_ranges(name: &str, phrase: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(phrase).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let (folded, owners): (Vec<char>, Vec<usize>) = name
        .chars()
        .enumerate()
        .flat_map(|(index, c)| c.to_lowercase().map(move |lower| (lower, index)))
        .unzip();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= folded.len() {
        if folded[start..start + needle.len()] == needle[..] {
            let first = owners[start];
            let last = owners[start + needle.len() - 1];
            ranges.push((first, last + 1));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::tests::{loaded_engine, RecordingRouter, StubProvider};
    use crate::domain::{FetchError, FilterAction};
    use crate::repository::tests::{bitcoin, ethereum, MockFetcher};
    use crate::repository::ItemRepository;
    use crate::storage::{MemoryCacheStore, CACHE_KEY};
    use std::sync::Arc;

    #[test]
    fn highlights_every_occurrence_ignoring_case() {
        assert_eq!(highlight_ranges("Bitcoin", "bit"), vec![(0, 3)]);
        assert_eq!(highlight_ranges("Bitcoin", "IN"), vec![(5, 7)]);
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(highlight_ranges("Bitcoin", "").is_empty());
        assert!(highlight_ranges("Bit", "Bitcoin").is_empty());
    }

    #[test]
    fn highlight_ranges_count_chars_not_bytes() {
        assert_eq!(highlight_ranges("Ünicoin", "coin"), vec![(3, 7)]);
    }

    #[test]
    fn icon_follows_activity_then_type() {
        assert_eq!(RowIcon::for_item(&bitcoin()), RowIcon::Coin);
        assert_eq!(RowIcon::for_item(&ethereum()), RowIcon::Inactive);

        let token = Item::new("Uniswap", "UNI", false, true, CryptoType::Token);
        assert_eq!(RowIcon::for_item(&token), RowIcon::Token);

        let unknown = Item::new("Mystery", "MYS", false, true, CryptoType::Unknown);
        assert_eq!(RowIcon::for_item(&unknown), RowIcon::None);
    }

    #[tokio::test]
    async fn success_lists_rows_with_count_in_header() {
        let (mut engine, _, _) = loaded_engine(vec![bitcoin(), ethereum()]).await;
        engine.set_search("bit");

        let vm = ListViewModel::compute(&engine);

        assert_eq!(vm.header.title, " Crypto Coins (1) ");
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].name, "Bitcoin");
        assert_eq!(vm.rows[0].symbol, "BTC");
        assert_eq!(vm.rows[0].highlight_ranges, vec![(0, 3)]);
        assert_eq!(vm.search_bar.query, "bit");
        assert!(!vm.loading);
        assert!(vm.alert.is_none());
        assert!(vm.empty_state.is_none());
    }

    #[tokio::test]
    async fn chips_reflect_active_filters() {
        let (mut engine, _, _) = loaded_engine(vec![bitcoin()]).await;
        engine.toggle_filter("Active", FilterAction::Add);

        let vm = ListViewModel::compute(&engine);

        let active: Vec<&str> = vm
            .filter_chips
            .iter()
            .filter(|chip| chip.is_active)
            .map(|chip| chip.label.as_str())
            .collect();
        assert_eq!(vm.filter_chips.len(), 4);
        assert_eq!(active, vec!["Active"]);
    }

    #[tokio::test]
    async fn loading_shows_no_rows() {
        let provider = Arc::new(StubProvider::succeeding(vec![bitcoin()]));
        let engine = ListEngine::new(provider, Arc::new(RecordingRouter::default()));

        let vm = ListViewModel::compute(&engine);

        assert!(vm.loading);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.header.title, " Crypto Coins (0) ");
    }

    #[tokio::test]
    async fn error_raises_alert_instead_of_empty_state() {
        let provider = Arc::new(StubProvider::failing(FetchError::HttpStatus(502)));
        let mut engine = ListEngine::new(provider, Arc::new(RecordingRouter::default()));
        engine.initialize().await;

        let vm = ListViewModel::compute(&engine);

        assert_eq!(vm.alert.as_deref(), Some("Request failed with HTTP status 502"));
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_none());
        assert!(!vm.loading);
    }

    #[tokio::test]
    async fn offline_start_lists_cached_rows_under_alert() {
        let fetcher = Arc::new(MockFetcher::new(vec![Err(FetchError::NoNetwork)]));
        let cache = Arc::new(MemoryCacheStore::with_entry(CACHE_KEY, vec![bitcoin()]));
        let repository = Arc::new(ItemRepository::new(fetcher, cache));
        let mut engine = ListEngine::new(repository, Arc::new(RecordingRouter::default()));
        engine.initialize().await;

        let vm = ListViewModel::compute(&engine);

        assert_eq!(vm.alert.as_deref(), Some("No network connection available"));
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].name, "Bitcoin");
        assert_eq!(vm.header.title, " Crypto Coins (1) ");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn multi_char_lowercase_still_highlights() {
        let item = Item::new("İstanbul", "IST", false, true, CryptoType::Coin);

        assert!(item.name_contains("i"));
        assert_eq!(highlight_ranges(&item.name, "i"), vec![(0, 1)]);
        assert_eq!(highlight_ranges(&item.name, "st"), vec![(1, 3)]);
    }

    #[tokio::test]
    async fn empty_success_distinguishes_no_data_from_no_match() {
        let (engine, _, _) = loaded_engine(Vec::new()).await;
        let vm = ListViewModel::compute(&engine);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No coins available"));

        let (mut engine, _, _) = loaded_engine(vec![bitcoin()]).await;
        engine.set_search("doge");
        let vm = ListViewModel::compute(&engine);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No matching coins"));
    }
}
