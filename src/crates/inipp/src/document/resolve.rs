//! Inheritance resolution
//!
//! A section's ancestor chain is the section itself followed by its parent,
//! grandparent and so on. The walk stops at a section without a parent, at a
//! parent that does not exist, or at a section already visited in the same
//! walk, which makes cyclic inheritance safe.

use crate::document::IniDocument;
use crate::section::Section;
use crate::shared::normalize_name;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Iterator over `(name, section)` pairs along an ancestor chain
pub struct AncestorChain<'a> {
    sections: &'a BTreeMap<String, Section>,
    next: Option<(&'a str, &'a Section)>,
    visited: HashSet<&'a str>,
}

impl<'a> AncestorChain<'a> {
    pub(crate) fn new(sections: &'a BTreeMap<String, Section>, start: &str) -> Self {
        let next = sections
            .get_key_value(start)
            .map(|(name, section)| (name.as_str(), section));

        Self {
            sections,
            next,
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for AncestorChain<'a> {
    type Item = (&'a str, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        let (name, section) = self.next.take()?;
        self.visited.insert(name);

        self.next = section.parent().and_then(|parent| {
            if self.visited.contains(parent) {
                debug!(section = name, parent, "Inheritance cycle detected, stopping walk");
                return None;
            }
            self.sections
                .get_key_value(parent)
                .map(|(name, section)| (name.as_str(), section))
        });

        Some((name, section))
    }
}

impl IniDocument {
    /// Walk the ancestor chain of `section`, starting with the section itself.
    /// Unknown sections yield an empty chain.
    pub fn ancestors(&self, section: &str) -> AncestorChain<'_> {
        AncestorChain::new(&self.sections, &normalize_name(section))
    }

    /// Raw value of `key` as seen from `section`: the closest definition
    /// along the ancestor chain wins.
    pub fn read_raw(&self, section: &str, key: &str) -> Option<&str> {
        let key = normalize_name(key);
        if key.is_empty() {
            return None;
        }

        self.ancestors(section)
            .find_map(|(_, ancestor)| ancestor.get_normalized(&key))
    }

    /// True when `key` resolves to a value, possibly inherited
    pub fn value_exists(&self, section: &str, key: &str) -> bool {
        self.read_raw(section, key).is_some()
    }

    /// Every key visible on `section` after inheritance, sorted and
    /// deduplicated
    pub fn effective_keys(&self, section: &str) -> Vec<String> {
        self.ancestors(section)
            .flat_map(|(_, ancestor)| ancestor.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Effective `(key, value)` pairs of `section`, sorted by key
    pub fn effective_values(&self, section: &str) -> Vec<(String, String)> {
        let mut values: BTreeMap<&str, &str> = BTreeMap::new();
        for (_, ancestor) in self.ancestors(section) {
            for (key, value) in ancestor.iter() {
                values.entry(key).or_insert(value);
            }
        }

        values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
