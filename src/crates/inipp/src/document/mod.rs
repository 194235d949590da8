//! The INI document: section storage, parsing, inheritance and persistence

pub mod parser;
pub mod resolve;
pub mod writer;

pub use parser::ParseSummary;
pub use resolve::AncestorChain;

use crate::section::Section;
use crate::shared::normalize_name;
use crate::types::{IniError, IniResult, WriteOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// An in-memory INI document.
///
/// Section names and keys are normalised to lowercase before every map
/// operation, so all lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawIniDocument")]
pub struct IniDocument {
    sections: BTreeMap<String, Section>,
}

/// Serialized shape of an [`IniDocument`], before section names are normalised
#[derive(Deserialize)]
struct RawIniDocument {
    #[serde(default)]
    sections: BTreeMap<String, Section>,
}

impl From<RawIniDocument> for IniDocument {
    /// Names that collide after normalisation are merged: the first one in
    /// map order keeps its metadata and values, later ones only add keys it
    /// does not define. Empty names are dropped.
    fn from(raw: RawIniDocument) -> Self {
        let mut sections: BTreeMap<String, Section> = BTreeMap::new();

        for (name, section) in raw.sections {
            let name = normalize_name(&name);
            if name.is_empty() {
                continue;
            }

            match sections.get_mut(&name) {
                Some(existing) => {
                    debug!(section = %name, "Merging case-duplicate section");
                    existing.merge_missing(
                        section.iter().map(|(k, v)| (k.to_string(), v.to_string())),
                    );
                }
                None => {
                    sections.insert(name, section);
                }
            }
        }

        Self { sections }
    }
}

impl IniDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text. Malformed lines are ignored, so this never fails.
    pub fn parse(text: &str) -> Self {
        let mut document = Self::new();
        let summary = parser::parse_into(&mut document.sections, text);
        debug!(
            sections = summary.sections,
            values = summary.values,
            ignored = summary.ignored_lines,
            "Parsed INI text"
        );
        document
    }

    /// Load and parse a UTF-8 file
    pub fn load(path: impl AsRef<Path>) -> IniResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| IniError::io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|_| IniError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        debug!(path = %path.display(), bytes = text.len(), "Loading INI file");
        Ok(Self::parse(&text))
    }

    /// Load a file, treating a missing file as an empty document
    pub fn load_or_empty(path: impl AsRef<Path>) -> IniResult<Self> {
        match Self::load(path.as_ref()) {
            Ok(document) => Ok(document),
            Err(e) if e.is_not_found() => {
                debug!(path = %path.as_ref().display(), "INI file not found, starting empty");
                Ok(Self::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Save with default [`WriteOptions`]
    pub fn save(&self, path: impl AsRef<Path>) -> IniResult<()> {
        self.save_with(path, &WriteOptions::default())
    }

    /// Serialize and atomically replace the file at `path`.
    ///
    /// The text is written to a temporary file in the same directory and then
    /// renamed over the destination, so a failed save leaves the old file
    /// untouched.
    pub fn save_with(&self, path: impl AsRef<Path>, options: &WriteOptions) -> IniResult<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let content = self.to_ini_string_with(options);

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| IniError::io(dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| IniError::io(temp.path(), e))?;
        temp.persist(path).map_err(|e| IniError::Persist {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Saved INI file");
        Ok(())
    }

    /// Remove every section
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections, abstract ones included
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Direct access to a section's own values and metadata
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&normalize_name(name))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Section names in ascending order. Abstract sections are only listed
    /// when `include_abstract` is set.
    pub fn sections(&self, include_abstract: bool) -> Vec<String> {
        self.sections
            .iter()
            .filter(|(_, section)| include_abstract || !section.is_abstract())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// False for unknown sections
    pub fn is_section_abstract(&self, name: &str) -> bool {
        self.section(name).is_some_and(Section::is_abstract)
    }

    /// Declared parent of a section, whether or not that parent exists
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.section(name).and_then(Section::parent)
    }

    /// Write a raw value into the named section itself, creating the section
    /// if needed. Ancestors are never touched. Returns `false` when the
    /// section name or key is empty.
    pub fn write_raw(&mut self, section: &str, key: &str, value: impl Into<String>) -> bool {
        let section = normalize_name(section);
        let key = normalize_name(key);
        if section.is_empty() || key.is_empty() {
            return false;
        }

        self.sections
            .entry(section)
            .or_insert_with(|| Section::new(false, None))
            .set(&key, value);
        true
    }

    /// Remove a key defined directly on a section. Inherited values stay
    /// visible afterwards.
    pub fn remove_value(&mut self, section: &str, key: &str) -> bool {
        self.sections
            .get_mut(&normalize_name(section))
            .and_then(|s| s.remove(key))
            .is_some()
    }

    /// Remove a whole section. Children that name it as parent simply stop
    /// inheriting.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.sections.remove(&normalize_name(name)).is_some()
    }
}

impl FromStr for IniDocument {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
