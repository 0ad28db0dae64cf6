//! Event handling for the item list screen.
//!
//! Presentation adapters translate user input into [`Event`]s and feed them to
//! [`handle_event`], which applies them to the [`ListEngine`] and returns the
//! actions to perform.
//!
//! # Event Types
//!
//! - **Search**: `SearchChanged`
//! - **Filters**: `FilterPressed`, `ResetFilters`
//! - **Selection**: `ItemSelected`, `ItemSelectedAt`
//! - **Data**: `CollectionUpdated`
//!
//! # Example
//!
//! ```rust,ignore
//! use coinlist::app::{handle_event, Action, Event};
//!
//! let actions = handle_event(&mut engine, &Event::SearchChanged("bit".into()));
//! assert_eq!(actions, vec![Action::Render]);
//! ```

use super::{Action, ListEngine};
use crate::domain::{FilterAction, Item};

/// Input arriving from the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search field now contains this text.
    SearchChanged(String),

    /// A filter chip was switched on or off.
    FilterPressed {
        /// Chip label as shown to the user.
        label: String,
        /// Whether the chip was switched on or off.
        action: FilterAction,
    },

    /// Search and every filter should be cleared.
    ResetFilters,

    /// The user picked this item.
    ItemSelected(Item),

    /// The user picked the row at this index of the displayed list.
    ItemSelectedAt(usize),

    /// The repository may have published a new collection.
    CollectionUpdated,
}

/// Applies `event` to `engine` and returns the actions to perform.
pub fn handle_event(engine: &mut ListEngine, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let render = match event {
        Event::SearchChanged(phrase) => engine.set_search(phrase.as_str()),
        Event::FilterPressed { label, action } => engine.toggle_filter(label, *action),
        Event::ResetFilters => engine.reset_filters(),
        Event::CollectionUpdated => engine.sync(),
        Event::ItemSelected(item) => return select(engine, item.clone()),
        Event::ItemSelectedAt(index) => {
            // The index refers to the rows on screen, so a pending replacement
            // must land first.
            let refreshed = engine.sync();
            let Some(item) = engine.item_at(*index).cloned() else {
                tracing::debug!(index, shown = engine.items().len(), "selection out of range");
                return if refreshed { vec![Action::Render] } else { vec![] };
            };
            let mut actions = select(engine, item);
            if refreshed {
                actions.insert(0, Action::Render);
            }
            return actions;
        }
    };

    if render {
        vec![Action::Render]
    } else {
        tracing::debug!("nothing changed, skipping render");
        vec![]
    }
}

fn select(engine: &mut ListEngine, item: Item) -> Vec<Action> {
    engine.select_item(&item);
    vec![Action::ShowDetail(item)]
}
