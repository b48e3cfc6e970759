//! Passport - The accumulating key-value record for one application session
//!
//! The passport is owned by the external flow controller; this crate sees
//! an immutable snapshot on the way in and hands back a [`Patch`] on the
//! way out. Entries are only ever replaced wholesale - a patch overwrites
//! keys, it never deep-merges into them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::Value;

/// A snapshot of the passport at one flow step.
///
/// Keys are dot-hierarchical namespaces (e.g.
/// `article4.lambeth.kiba.brixton`). A key with children is a category
/// whose own value typically summarizes whether any child applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passport(BTreeMap<String, Value>);

impl Passport {
    /// Create an empty passport
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is present
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Apply a patch, overwriting each patched key wholesale
    pub fn merge(&mut self, patch: Patch) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the passport holds no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Passport {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self(entries)
    }
}

impl FromIterator<(String, Value)> for Passport {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Keys to be merged into the live passport by the flow controller.
///
/// This is the sole output contract of every component in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(BTreeMap<String, Value>);

impl Patch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace a patched key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a patched key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the patch carries no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of patched keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate patched keys in order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consume the patch into its underlying map
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl IntoIterator for Patch {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Patch {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
