//! Filter predicates and the active filter set.
//!
//! A [`FilterPredicate`] is a single rule matched against an [`Item`]. The
//! [`FilterSet`] holds the predicates the user has switched on; an item passes
//! the set only when it satisfies every predicate in it.
//!
//! Predicates are toggled from the UI by their display label. The label comes
//! from the predicate kind alone, so `IsActive(true)` and `IsActive(false)`
//! share the label `"Active"`, and label lookup always resolves against
//! [`FilterPredicate::CANONICAL`].

use super::item::{CryptoType, Item};

/// A single filter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPredicate {
    /// Matches items of type [`CryptoType::Coin`].
    IsCoin,
    /// Matches items of type [`CryptoType::Token`].
    IsToken,
    /// Matches items whose `is_active` equals the value.
    IsActive(bool),
    /// Matches items whose `is_new` equals the value.
    IsNew(bool),
}

impl FilterPredicate {
    /// The predicates offered for toggling, in chip order.
    pub const CANONICAL: [Self; 4] = [
        Self::IsCoin,
        Self::IsToken,
        Self::IsActive(true),
        Self::IsNew(true),
    ];

    /// Display label of the predicate kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinlist::domain::FilterPredicate;
    ///
    /// assert_eq!(FilterPredicate::IsActive(true).label(), "Active");
    /// assert_eq!(FilterPredicate::IsActive(false).label(), "Active");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IsCoin => "Coins",
            Self::IsToken => "Token",
            Self::IsActive(_) => "Active",
            Self::IsNew(_) => "New",
        }
    }

    /// Resolves a display label to its canonical predicate.
    ///
    /// Returns `None` for labels that name no predicate kind.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::CANONICAL.into_iter().find(|p| p.label() == label)
    }

    /// Labels of the canonical predicates, in chip order.
    #[must_use]
    pub fn canonical_labels() -> Vec<String> {
        Self::CANONICAL.iter().map(|p| p.label().to_string()).collect()
    }

    /// Returns true if `item` satisfies this predicate.
    #[must_use]
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Self::IsCoin => item.kind == CryptoType::Coin,
            Self::IsToken => item.kind == CryptoType::Token,
            Self::IsActive(value) => item.is_active == value,
            Self::IsNew(value) => item.is_new == value,
        }
    }
}

/// Direction of a filter toggle coming from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Add,
    Remove,
}

/// The conjunction of currently active predicates.
///
/// Insertion is idempotent and removal of an absent predicate is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    predicates: Vec<FilterPredicate>,
}

impl FilterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { predicates: Vec::new() }
    }

    /// Adds `predicate` if absent. Returns true if the set changed.
    pub fn insert(&mut self, predicate: FilterPredicate) -> bool {
        if self.predicates.contains(&predicate) {
            return false;
        }
        self.predicates.push(predicate);
        true
    }

    /// Removes `predicate` if present. Returns true if the set changed.
    pub fn remove(&mut self, predicate: FilterPredicate) -> bool {
        let before = self.predicates.len();
        self.predicates.retain(|p| *p != predicate);
        self.predicates.len() != before
    }

    /// Applies a UI toggle. Returns true if the set changed.
    pub fn apply(&mut self, predicate: FilterPredicate, action: FilterAction) -> bool {
        match action {
            FilterAction::Add => self.insert(predicate),
            FilterAction::Remove => self.remove(predicate),
        }
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    #[must_use]
    pub fn contains(&self, predicate: FilterPredicate) -> bool {
        self.predicates.contains(&predicate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Active predicates in insertion order.
    #[must_use]
    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    /// Returns true if `item` satisfies every active predicate.
    ///
    /// Vacuously true for an empty set.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(is_new: bool, is_active: bool, kind: CryptoType) -> Item {
        Item::new("Sample", "SMP", is_new, is_active, kind)
    }

    #[test]
    fn predicates_match_by_kind() {
        let coin = item(false, true, CryptoType::Coin);
        let token = item(true, false, CryptoType::Token);
        let other = item(false, false, CryptoType::Unknown);

        assert!(FilterPredicate::IsCoin.matches(&coin));
        assert!(!FilterPredicate::IsCoin.matches(&token));
        assert!(!FilterPredicate::IsCoin.matches(&other));
        assert!(FilterPredicate::IsToken.matches(&token));
        assert!(!FilterPredicate::IsToken.matches(&other));
        assert!(FilterPredicate::IsActive(true).matches(&coin));
        assert!(FilterPredicate::IsActive(false).matches(&token));
        assert!(FilterPredicate::IsNew(true).matches(&token));
        assert!(FilterPredicate::IsNew(false).matches(&coin));
    }

    #[test]
    fn labels_resolve_to_canonical_predicates() {
        assert_eq!(FilterPredicate::from_label("Coins"), Some(FilterPredicate::IsCoin));
        assert_eq!(FilterPredicate::from_label("Token"), Some(FilterPredicate::IsToken));
        assert_eq!(FilterPredicate::from_label("Active"), Some(FilterPredicate::IsActive(true)));
        assert_eq!(FilterPredicate::from_label("New"), Some(FilterPredicate::IsNew(true)));
        assert_eq!(FilterPredicate::from_label("Popular"), None);
        assert_eq!(FilterPredicate::from_label("coins"), None);
    }

    #[test]
    fn canonical_labels_cover_every_kind() {
        assert_eq!(
            FilterPredicate::canonical_labels(),
            vec!["Coins", "Token", "Active", "New"]
        );
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = FilterSet::new();
        assert!(set.insert(FilterPredicate::IsCoin));
        assert!(!set.insert(FilterPredicate::IsCoin));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_restores_previous_state() {
        let mut set = FilterSet::new();
        set.insert(FilterPredicate::IsNew(true));
        let before = set.clone();

        set.apply(FilterPredicate::IsActive(true), FilterAction::Add);
        set.apply(FilterPredicate::IsActive(true), FilterAction::Remove);
        assert_eq!(set, before);

        assert!(!set.remove(FilterPredicate::IsToken));
        assert_eq!(set, before);
    }

    #[test]
    fn empty_set_matches_everything() {
        let set = FilterSet::new();
        assert!(set.matches(&item(false, false, CryptoType::Unknown)));
    }

    #[test]
    fn set_requires_all_predicates() {
        let mut set = FilterSet::new();
        set.insert(FilterPredicate::IsCoin);
        set.insert(FilterPredicate::IsActive(true));

        assert!(set.matches(&item(false, true, CryptoType::Coin)));
        assert!(!set.matches(&item(false, false, CryptoType::Coin)));
        assert!(!set.matches(&item(false, true, CryptoType::Token)));
    }
}
