//! Line-oriented INI parser
//!
//! Each physical line is handled on its own:
//! - `;` as first non-blank character: comment, skipped
//! - `[name]` or `[name:parent]`: section header
//! - `key=value` inside a section: value line
//! - anything else: ignored

use crate::constants::{
    ABSTRACT_MARKER, BOM, COMMENT_MARKER, HEADER_TRIM_CHARS, KEY_VALUE_SEPARATOR,
    LINE_TRIM_CHARS, OPEN_BRACKET, PARENT_SEPARATOR,
};
use crate::section::Section;
use crate::shared::{normalize_line_endings, normalize_name, strip_quotes};
use std::collections::BTreeMap;
use tracing::trace;

/// Counters collected while parsing, used for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Sections created (re-declarations are not counted)
    pub sections: usize,
    /// Value lines stored
    pub values: usize,
    /// Non-blank, non-comment lines that were dropped
    pub ignored_lines: usize,
}

/// A parsed `[name:parent]` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub parent: Option<String>,
    pub is_abstract: bool,
}

/// Parse a header line that starts with `[`.
///
/// Returns `None` when the name is empty after trimming, which puts the
/// parser in the "no current section" state.
pub fn parse_header(line: &str) -> Option<SectionHeader> {
    let trimmed = line.trim_matches(HEADER_TRIM_CHARS).to_lowercase();

    // Split on the first colon only. `[a:b:c]` gets the parent `b:c`, which
    // can never name a parsed section, so `a` ends up with no ancestors.
    let (name, parent) = match trimmed.split_once(PARENT_SEPARATOR) {
        Some((name, parent)) => {
            let parent = parent.trim();
            let parent = (!parent.is_empty()).then(|| parent.to_string());
            (name.trim().to_string(), parent)
        }
        None => (trimmed, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(SectionHeader {
        is_abstract: name.starts_with(ABSTRACT_MARKER),
        name,
        parent,
    })
}

/// Parse a value line into a normalised key and an unquoted value.
///
/// Returns `None` when the line has no `=` or the key is empty.
pub fn parse_value_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    let key = normalize_name(key);
    if key.is_empty() {
        return None;
    }

    Some((key, strip_quotes(value.trim()).to_string()))
}

/// Parse `text` into `sections`.
///
/// A header naming an existing section only makes it current again; the
/// first declaration's abstract flag and parent are kept.
pub fn parse_into(sections: &mut BTreeMap<String, Section>, text: &str) -> ParseSummary {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let text = normalize_line_endings(text);

    let mut summary = ParseSummary::default();
    let mut current: Option<String> = None;

    for (index, raw) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw.trim_matches(LINE_TRIM_CHARS);

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if line.starts_with(OPEN_BRACKET) {
            current = parse_header(line).map(|header| {
                if !sections.contains_key(&header.name) {
                    sections.insert(
                        header.name.clone(),
                        Section::new(header.is_abstract, header.parent.as_deref()),
                    );
                    summary.sections += 1;
                } else {
                    trace!(line = line_number, section = %header.name, "Section re-declared");
                }
                header.name
            });

            if current.is_none() {
                trace!(line = line_number, "Empty section header");
                summary.ignored_lines += 1;
            }
            continue;
        }

        let Some(section) = current.as_ref().and_then(|name| sections.get_mut(name)) else {
            trace!(line = line_number, "Line outside of any section ignored");
            summary.ignored_lines += 1;
            continue;
        };

        match parse_value_line(line) {
            Some((key, value)) => {
                section.set(&key, value);
                summary.values += 1;
            }
            None => {
                trace!(line = line_number, "Unrecognised line ignored");
                summary.ignored_lines += 1;
            }
        }
    }

    summary
}
