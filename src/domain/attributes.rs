use serde::{Deserialize, Serialize};

use crate::common::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Labeled measurements of a catalog entry, kept in insertion order.
///
/// Consumers render attributes in the order a catalog's schema lists them, so
/// this is a list rather than a map. Keys are unique by convention only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueBag {
    entries: Vec<KeyValue>,
}

impl KeyValueBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(KeyValue {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Push unless the value is blank.
    pub fn push_nonempty(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.push(key, value);
        }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    /// Like [`get`](Self::get), but absence is reported as an error.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| CatalogError::MissingOverrideAttribute {
            key: key.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|kv| kv.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = KeyValueBag::new();
        for (key, value) in iter {
            bag.push(key, value);
        }
        bag
    }
}
