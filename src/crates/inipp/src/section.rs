//! A single INI section

use crate::shared::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw values of one section plus its inheritance metadata.
///
/// A section only ever holds its own values. Values inherited from the parent
/// are resolved by [`IniDocument`](crate::IniDocument) at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSection")]
pub struct Section {
    is_abstract: bool,
    parent: Option<String>,
    values: BTreeMap<String, String>,
}

/// Serialized shape of a [`Section`], before names are normalised
#[derive(Deserialize)]
struct RawSection {
    #[serde(default)]
    is_abstract: bool,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        let mut section = Section::new(raw.is_abstract, raw.parent.as_deref());
        section.merge_missing(raw.values);
        section
    }
}

impl Section {
    /// Create an empty section. The parent name is normalised; an empty name
    /// means no parent.
    pub fn new(is_abstract: bool, parent: Option<&str>) -> Self {
        let parent = parent.map(normalize_name).filter(|p| !p.is_empty());
        Self {
            is_abstract,
            parent,
            values: BTreeMap::new(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Own value for a key that is already trimmed and lowercased
    pub(crate) fn get_normalized(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Add entries whose normalised key is not defined yet; existing values
    /// and empty keys are left alone
    pub(crate) fn merge_missing(&mut self, values: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in values {
            let key = normalize_name(&key);
            if !key.is_empty() {
                self.values.entry(key).or_insert(value);
            }
        }
    }

    /// Own value for `key`. `None` means "not defined here", which is
    /// different from `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_name(key)).map(String::as_str)
    }

    /// Set an own value, overwriting any previous one
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_name(key), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_name(key))
    }

    /// Remove an own value, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(&normalize_name(key))
    }

    /// Drop all values; metadata is kept
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Own keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Own entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
