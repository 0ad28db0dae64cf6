//! Crypto item domain model.
//!
//! This module defines [`Item`], the immutable record for one crypto asset as
//! delivered by the remote endpoint, along with its [`CryptoType`] category.
//! Items have no server-assigned identifier: equality and hashing are
//! structural, so two items with identical fields are the same entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category of a crypto asset.
///
/// The wire format uses lowercase strings (`"coin"`, `"token"`). Any other
/// value decodes to [`CryptoType::Unknown`] instead of failing the decode of
/// the surrounding collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoType {
    /// A native chain coin.
    Coin,

    /// A token issued on top of another chain.
    Token,

    /// Any category this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// A single crypto asset record.
///
/// # Wire Format
///
/// ```json
/// {
///   "name": "Bitcoin",
///   "symbol": "BTC",
///   "is_new": false,
///   "is_active": true,
///   "type": "coin"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub symbol: String,
    pub is_new: bool,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: CryptoType,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinlist::domain::{CryptoType, Item};
    ///
    /// let item = Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin);
    /// assert_eq!(item.symbol, "BTC");
    /// ```
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        is_new: bool,
        is_active: bool,
        kind: CryptoType,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            is_new,
            is_active,
            kind,
        }
    }

    /// Returns true if `name` contains `phrase`, ignoring case.
    ///
    /// An empty phrase matches every item.
    #[must_use]
    pub fn name_contains(&self, phrase: &str) -> bool {
        phrase.is_empty() || fold_case(&self.name).contains(&fold_case(phrase))
    }
}

/// Lowercases `text` one char at a time.
///
/// Search matching and search highlighting both fold through this, so a
/// match always has a highlight.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Removes structurally identical items, keeping the first occurrence.
///
/// The collection is used as a diffable-list identity, so duplicates would be
/// indistinguishable rows. Order of the remaining items is preserved.
#[must_use]
pub fn dedup_items(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_format() {
        let json = r#"{"name":"Monero","symbol":"XMR","is_new":false,"is_active":true,"type":"coin"}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item, Item::new("Monero", "XMR", false, true, CryptoType::Coin));
    }

    #[test]
    fn unknown_type_decodes_to_unknown_variant() {
        let json = r#"[
            {"name":"Tether","symbol":"USDT","is_new":false,"is_active":true,"type":"stablecoin"},
            {"name":"Chainlink","symbol":"LINK","is_new":true,"is_active":true,"type":"token"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, CryptoType::Unknown);
        assert_eq!(items[1].kind, CryptoType::Token);
    }

    #[test]
    fn missing_field_fails_decode() {
        let json = r#"{"name":"Monero","symbol":"XMR","is_active":true,"type":"coin"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn serializes_type_under_wire_key() {
        let item = Item::new("Bitcoin", "BTC", true, false, CryptoType::Token);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["type"], "token");
        assert_eq!(value["is_new"], true);
        assert_eq!(value["is_active"], false);
    }

    #[test]
    fn name_search_ignores_case() {
        let item = Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin);

        assert!(item.name_contains("bit"));
        assert!(item.name_contains("COIN"));
        assert!(item.name_contains(""));
        assert!(!item.name_contains("eth"));
    }

    #[test]
    fn folding_expands_multi_char_lowercase() {
        assert_eq!(fold_case("İ").chars().count(), 2);
        assert_eq!(fold_case("BiT"), "bit");
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let btc = Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin);
        let eth = Item::new("Ethereum", "ETH", false, false, CryptoType::Coin);

        let items = dedup_items(vec![btc.clone(), eth.clone(), btc.clone()]);
        assert_eq!(items, vec![btc, eth]);
    }
}
