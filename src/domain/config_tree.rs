// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested configuration tree with deep-merge semantics.
//!
//! This module provides the `ConfigTree` type, an insertion-ordered mapping
//! from string keys to [`ConfigValue`]s. Trees are produced by the
//! materializer and consumed through the [`Config`](crate::domain::Config)
//! container.

use crate::domain::config_value::ConfigValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from string keys to configuration values.
///
/// `ConfigTree` preserves insertion order, matching the order of sections and
/// keys in the source file. Values may themselves be
/// [`ConfigValue::Table`]s, giving the tree arbitrary nesting depth.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_tree::ConfigTree;
/// use inicfg::domain::config_value::ConfigValue;
///
/// let mut tree = ConfigTree::new();
/// tree.insert("host".to_string(), ConfigValue::from("localhost"));
/// tree.insert("port".to_string(), ConfigValue::Int(3306));
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.get("port"), Some(&ConfigValue::Int(3306)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigTree(IndexMap<String, ConfigValue>);

impl ConfigTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        ConfigTree(IndexMap::new())
    }

    /// Returns the number of entries at the top level of the tree.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts a value under `key`, replacing any previous value.
    ///
    /// If the key already exists it keeps its original position in the
    /// iteration order.
    pub fn insert(&mut self, key: String, value: ConfigValue) -> Option<ConfigValue> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key` at this level, if any.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the tree contains `key` at this level.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the entries at this level, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    /// Iterates over the keys at this level, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Recursively merges `other` into this tree.
    ///
    /// For each key in `other`: if the key is absent here it is inserted; if
    /// both sides hold tables the tables merge recursively; otherwise the
    /// incoming value replaces the existing one. Later assignments therefore
    /// win on direct leaf conflicts, while non-conflicting sibling keys at
    /// every depth are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_tree::ConfigTree;
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let mut a = ConfigTree::new();
    /// a.insert("host".to_string(), ConfigValue::from("localhost"));
    ///
    /// let mut b = ConfigTree::new();
    /// b.insert("port".to_string(), ConfigValue::Int(3306));
    ///
    /// a.deep_merge(b);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn deep_merge(&mut self, other: ConfigTree) {
        for (key, value) in other {
            match (self.0.get_mut(&key), value) {
                (Some(ConfigValue::Table(existing)), ConfigValue::Table(incoming)) => {
                    existing.deep_merge(incoming);
                }
                (_, value) => {
                    self.0.insert(key, value);
                }
            }
        }
    }
}

impl IntoIterator for ConfigTree {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigTree {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        ConfigTree(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(s: &str) -> ConfigValue {
        ConfigValue::from(s)
    }

    #[test]
    fn test_new_is_empty() {
        let tree = ConfigTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = ConfigTree::new();
        tree.insert("key".to_string(), leaf("value"));

        assert_eq!(tree.get("key"), Some(&leaf("value")));
        assert_eq!(tree.get("missing"), None);
        assert!(tree.contains_key("key"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut tree = ConfigTree::new();
        tree.insert("key".to_string(), leaf("first"));
        let previous = tree.insert("key".to_string(), leaf("second"));

        assert_eq!(previous, Some(leaf("first")));
        assert_eq!(tree.get("key"), Some(&leaf("second")));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tree = ConfigTree::new();
        tree.insert("zebra".to_string(), leaf("1"));
        tree.insert("apple".to_string(), leaf("2"));
        tree.insert("mango".to_string(), leaf("3"));

        let keys: Vec<&String> = tree.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_deep_merge_disjoint_keys() {
        let mut a = ConfigTree::new();
        a.insert("host".to_string(), leaf("localhost"));

        let mut b = ConfigTree::new();
        b.insert("port".to_string(), ConfigValue::Int(3306));

        a.deep_merge(b);

        assert_eq!(a.len(), 2);
        assert_eq!(a.get("host"), Some(&leaf("localhost")));
        assert_eq!(a.get("port"), Some(&ConfigValue::Int(3306)));
    }

    #[test]
    fn test_deep_merge_leaf_conflict_last_wins() {
        let mut a = ConfigTree::new();
        a.insert("key".to_string(), leaf("old"));

        let mut b = ConfigTree::new();
        b.insert("key".to_string(), leaf("new"));

        a.deep_merge(b);
        assert_eq!(a.get("key"), Some(&leaf("new")));
    }

    #[test]
    fn test_deep_merge_nested_tables() {
        let mut inner_a = ConfigTree::new();
        inner_a.insert("host".to_string(), leaf("localhost"));
        let mut a = ConfigTree::new();
        a.insert("db".to_string(), ConfigValue::Table(inner_a));

        let mut inner_b = ConfigTree::new();
        inner_b.insert("port".to_string(), ConfigValue::Int(3306));
        let mut b = ConfigTree::new();
        b.insert("db".to_string(), ConfigValue::Table(inner_b));

        a.deep_merge(b);

        let db = a.get("db").unwrap().as_table("db").unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("host"), Some(&leaf("localhost")));
        assert_eq!(db.get("port"), Some(&ConfigValue::Int(3306)));
    }

    #[test]
    fn test_deep_merge_table_replaces_leaf() {
        let mut a = ConfigTree::new();
        a.insert("key".to_string(), leaf("scalar"));

        let mut inner = ConfigTree::new();
        inner.insert("sub".to_string(), leaf("nested"));
        let mut b = ConfigTree::new();
        b.insert("key".to_string(), ConfigValue::Table(inner));

        a.deep_merge(b);
        assert!(matches!(a.get("key"), Some(ConfigValue::Table(_))));
    }

    #[test]
    fn test_deep_merge_leaf_replaces_table() {
        let mut inner = ConfigTree::new();
        inner.insert("sub".to_string(), leaf("nested"));
        let mut a = ConfigTree::new();
        a.insert("key".to_string(), ConfigValue::Table(inner));

        let mut b = ConfigTree::new();
        b.insert("key".to_string(), leaf("scalar"));

        a.deep_merge(b);
        assert_eq!(a.get("key"), Some(&leaf("scalar")));
    }

    #[test]
    fn test_deep_merge_three_levels() {
        let mut a: ConfigTree = [(
            "a".to_string(),
            ConfigValue::Table(
                [(
                    "b".to_string(),
                    ConfigValue::Table([("c".to_string(), leaf("1"))].into_iter().collect()),
                )]
                .into_iter()
                .collect(),
            ),
        )]
        .into_iter()
        .collect();

        let b: ConfigTree = [(
            "a".to_string(),
            ConfigValue::Table(
                [(
                    "b".to_string(),
                    ConfigValue::Table([("d".to_string(), leaf("2"))].into_iter().collect()),
                )]
                .into_iter()
                .collect(),
            ),
        )]
        .into_iter()
        .collect();

        a.deep_merge(b);

        let inner = a
            .get("a")
            .unwrap()
            .as_table("a")
            .unwrap()
            .get("b")
            .unwrap()
            .as_table("a.b")
            .unwrap();
        assert_eq!(inner.get("c"), Some(&leaf("1")));
        assert_eq!(inner.get("d"), Some(&leaf("2")));
    }

    #[test]
    fn test_from_iterator() {
        let tree: ConfigTree = [
            ("one".to_string(), ConfigValue::Int(1)),
            ("two".to_string(), ConfigValue::Int(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["one", "two"]);
    }
}
