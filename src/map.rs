//! Ordered keyed view of a decoded JSON object.
//!
//! A decoded object is stored flat inside a `Symbol` as
//! `[key0, value0, key1, value1, ...]`. [`VariantMap`] rebuilds a lookup table
//! from that layout on an [`IndexMap`], so iteration follows the original
//! member order, and flattens back into the same layout.
//!
//! ## Examples
//!
//! ```rust
//! use variant_json::{from_str, Variant};
//!
//! let value = from_str(r#"{"b": 2, "a": 1}"#).unwrap();
//! let map = value.to_map().unwrap();
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["b", "a"]);
//!
//! let back = Variant::from(map);
//! assert_eq!(back, value);
//! ```

use crate::value::Symbol;
use crate::Variant;
use indexmap::IndexMap;

/// An ordered map of string keys to variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantMap(IndexMap<String, Variant>);

impl VariantMap {
    #[must_use]
    pub fn new() -> Self {
        VariantMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        VariantMap(IndexMap::with_capacity(capacity))
    }

    /// Rebuilds a map from flattened object entries.
    ///
    /// Returns `None` when the entry count is odd or a key slot is not a
    /// `Cadena`. A repeated key keeps its first position and its last value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::{Variant, VariantMap};
    ///
    /// let entries = [Variant::from("k"), Variant::from(1), Variant::from("k"), Variant::from(2)];
    /// let map = VariantMap::from_entries(&entries).unwrap();
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("k"), Some(&Variant::from(2)));
    ///
    /// assert!(VariantMap::from_entries(&entries[..3]).is_none());
    /// assert!(VariantMap::from_entries(&[Variant::from(1), Variant::from(2)]).is_none());
    /// ```
    #[must_use]
    pub fn from_entries(entries: &[Variant]) -> Option<Self> {
        if entries.len() % 2 != 0 {
            return None;
        }
        let mut map = VariantMap::with_capacity(entries.len() / 2);
        for pair in entries.chunks_exact(2) {
            match &pair[0] {
                Variant::Cadena(key) => {
                    map.insert(key.clone(), pair[1].clone());
                }
                _ => return None,
            }
        }
        Some(map)
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: String, value: Variant) -> Option<Variant> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Variant> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Variant> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Variant> {
        self.0.iter()
    }
}

impl From<VariantMap> for Variant {
    fn from(map: VariantMap) -> Self {
        let mut symbol = Symbol {
            name: String::new(),
            entries: Vec::with_capacity(map.len() * 2),
        };
        for (key, value) in map {
            symbol.entries.push(Variant::Cadena(key));
            symbol.entries.push(value);
        }
        Variant::Symbol(symbol)
    }
}

impl IntoIterator for VariantMap {
    type Item = (String, Variant);
    type IntoIter = indexmap::map::IntoIter<String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Variant)> for VariantMap {
    fn from_iter<T: IntoIterator<Item = (String, Variant)>>(iter: T) -> Self {
        VariantMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    #[test]
    fn test_flatten_keeps_order() {
        let map: VariantMap = vec![
            ("z".to_string(), Variant::from(1)),
            ("a".to_string(), Variant::from("x")),
        ]
        .into_iter()
        .collect();
        let value = Variant::from(map);
        assert_eq!(
            value.as_entries().unwrap(),
            &[
                Variant::from("z"),
                Variant::from(1),
                Variant::from("a"),
                Variant::from("x"),
            ]
        );
    }

    #[test]
    fn test_symbol_without_entries_is_empty_map() {
        let sym = Variant::with_text(Tag::Symbol, "name");
        assert_eq!(sym.to_map(), Some(VariantMap::new()));
        assert_eq!(Variant::from(1).to_map(), None);
    }

    #[test]
    fn test_rejects_non_string_keys() {
        let entries = [Variant::with_text(Tag::Symbol, "k"), Variant::from(1)];
        assert!(VariantMap::from_entries(&entries).is_none());
    }
}
