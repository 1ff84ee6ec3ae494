//! Parameter maps: the flat `wire name -> wire value` projection of a message.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire name of the signature field. Never part of the signed input.
pub const SIGN_FIELD: &str = "sign";

/// A mapping from wire field name to its string encoding.
///
/// Keys are unique. Iteration is in byte-wise ascending key order, which is the
/// order both the signer and the XML encoder need, but callers must not rely on
/// insertion order meaning anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, String>);

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a value unconditionally, replacing any previous value.
    ///
    /// Empty strings are kept; use [`put_str`](Self::put_str) for the omission rule.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert a string field, skipping it when empty.
    pub fn put_str(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    /// Insert an integer field as decimal text, skipping it when zero.
    pub fn put_int(&mut self, key: &str, value: u64) {
        if value != 0 {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    /// Look up a value by wire name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a value, returning `""` when absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Remove a value by wire name.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Whether the map has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The signature carried by this map, if any.
    pub fn signature(&self) -> Option<&str> {
        self.get(SIGN_FIELD)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ParameterMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
