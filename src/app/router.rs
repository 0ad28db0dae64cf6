//! Navigation collaborator invoked when the user picks an item.

use crate::domain::Item;

/// Hands a selected item over to the detail presentation.
///
/// The engine only forwards the selection; what "detail" means is up to the
/// implementor.
pub trait Router: Send + Sync {
    /// Navigates to the detail view of `item`.
    fn route_to_detail(&self, item: &Item);
}
