//! Actions the presentation adapter performs after an event.
//!
//! The event handler returns a `Vec<Action>` for each event so several
//! follow-ups can be queued at once. An empty vector means nothing visible
//! changed.

use crate::domain::Item;

/// Follow-up requested from the presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The derived list, the filter chips or the search highlight changed.
    ///
    /// The adapter recomputes the view model and redraws.
    Render,

    /// The item was routed to its detail view.
    ///
    /// Emitted after [`Router::route_to_detail`](super::Router::route_to_detail)
    /// has run, for adapters that present the detail themselves.
    ShowDetail(Item),
}
