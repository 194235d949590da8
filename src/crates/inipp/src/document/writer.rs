//! INI serialization

use crate::constants::{CLOSE_BRACKET, KEY_VALUE_SEPARATOR, OPEN_BRACKET, PARENT_SEPARATOR};
use crate::document::IniDocument;
use crate::shared::{is_writable_key, is_writable_section_name, is_writable_value, quote_if_needed};
use crate::types::{InheritanceMode, WriteOptions};
use std::fmt;
use tracing::warn;

/// Accumulates output lines with a fixed line terminator
pub struct LineWriter {
    output: String,
    line_ending: &'static str,
}

impl LineWriter {
    pub fn new(line_ending: &'static str) -> Self {
        Self {
            output: String::new(),
            line_ending,
        }
    }

    pub fn push(&mut self, content: &str) {
        self.output.push_str(content);
        self.output.push_str(self.line_ending);
    }

    pub fn push_header(&mut self, name: &str, parent: Option<&str>) {
        let header = match parent {
            Some(parent) => format!(
                "{}{}{}{}{}",
                OPEN_BRACKET, name, PARENT_SEPARATOR, parent, CLOSE_BRACKET
            ),
            None => format!("{}{}{}", OPEN_BRACKET, name, CLOSE_BRACKET),
        };
        self.push(&header);
    }

    pub fn push_value(&mut self, key: &str, value: &str) {
        self.push(&format!("{}{}{}", key, KEY_VALUE_SEPARATOR, quote_if_needed(value)));
    }

    pub fn blank_line(&mut self) {
        self.output.push_str(self.line_ending);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Keep only the entries that can be written on one line, warning about the rest
fn writable_entries<'a>(
    section: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<(&'a str, &'a str)> {
    entries
        .filter(|(key, value)| {
            if value.is_empty() {
                return false;
            }
            if !is_writable_key(key) || !is_writable_value(value) {
                warn!(section, key = *key, "Value cannot be written as a single INI line, skipped");
                return false;
            }
            true
        })
        .collect()
}

impl IniDocument {
    /// Serialize with default [`WriteOptions`]
    pub fn to_ini_string(&self) -> String {
        self.to_ini_string_with(&WriteOptions::default())
    }

    /// Serialize to INI text.
    ///
    /// Sections and keys come out in ascending order. Empty values are
    /// dropped, and so are sections left with nothing to write.
    pub fn to_ini_string_with(&self, options: &WriteOptions) -> String {
        let mut writer = LineWriter::new(options.line_ending.as_str());

        for (name, section) in &self.sections {
            if !is_writable_section_name(name) {
                warn!(section = %name, "Section name cannot be written as an INI header, skipped");
                continue;
            }

            match options.inheritance {
                InheritanceMode::Preserve => {
                    let entries = writable_entries(name, section.iter());
                    if entries.is_empty() && section.parent().is_none() {
                        continue;
                    }

                    writer.push_header(name, section.parent());
                    for (key, value) in entries {
                        writer.push_value(key, value);
                    }
                }
                InheritanceMode::Flatten => {
                    if section.is_abstract() {
                        continue;
                    }

                    let resolved = self.effective_values(name);
                    let entries = writable_entries(
                        name,
                        resolved.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                    );
                    if entries.is_empty() {
                        continue;
                    }

                    writer.push_header(name, None);
                    for (key, value) in entries {
                        writer.push_value(key, value);
                    }
                }
            }

            writer.blank_line();
        }

        writer.finish()
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ini_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineEnding;

    #[test]
    fn test_basic_output_uses_crlf() {
        let doc = IniDocument::parse("[b]\ny=2\nx=1\n[a]\nk=v\n");
        assert_eq!(doc.to_ini_string(), "[a]\r\nk=v\r\n\r\n[b]\r\nx=1\r\ny=2\r\n\r\n");
    }

    #[test]
    fn test_lf_line_ending() {
        let doc = IniDocument::parse("[a]\nk=v\n");
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(doc.to_ini_string_with(&options), "[a]\nk=v\n\n");
    }

    #[test]
    fn test_empty_values_and_sections_omitted() {
        let doc = IniDocument::parse("[empty]\n[blank]\nk=\n[full]\nk=v\n");
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(doc.to_ini_string_with(&options), "[full]\nk=v\n\n");
    }

    #[test]
    fn test_preserve_keeps_parents_and_abstract_sections() {
        let doc = IniDocument::parse("[_base]\nk=1\n[child:_base]\n");
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(
            doc.to_ini_string_with(&options),
            "[_base]\nk=1\n\n[child:_base]\n\n"
        );
    }

    #[test]
    fn test_flatten_inlines_inherited_values() {
        let doc = IniDocument::parse("[_base]\nk=1\nj=2\n[child:_base]\nj=3\n");
        let options = WriteOptions::flattened().with_line_ending(LineEnding::Lf);
        assert_eq!(doc.to_ini_string_with(&options), "[child]\nj=3\nk=1\n\n");
    }

    #[test]
    fn test_values_needing_quotes() {
        let mut doc = IniDocument::new();
        doc.write_raw("s", "padded", "  x  ");
        doc.write_raw("s", "quoted", "\"q\"");
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(
            doc.to_ini_string_with(&options),
            "[s]\npadded=\"  x  \"\nquoted=\"\"q\"\"\n\n"
        );
    }

    #[test]
    fn test_unwritable_entries_skipped() {
        let mut doc = IniDocument::new();
        doc.write_raw("s", "multi", "line\nbreak");
        doc.write_raw("s", "a=b", "1");
        doc.write_raw("s", "ok", "1");
        doc.write_raw("x:y", "k", "v");
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(doc.to_ini_string_with(&options), "[s]\nok=1\n\n");
    }

    #[test]
    fn test_empty_values_do_not_survive_a_round_trip() {
        // An empty own value shadows the parent until the document is saved
        let doc = IniDocument::parse("[a]\nk=1\n[b:a]\nk=\n");
        assert_eq!(doc.read_raw("b", "k"), Some(""));
        let reloaded = IniDocument::parse(&doc.to_ini_string());
        assert_eq!(reloaded.read_raw("b", "k"), Some("1"));

        // `""` unquotes to an empty value, which is then not written at all
        let doc = IniDocument::parse("[s]\nk=\"\"\n");
        assert_eq!(doc.read_raw("s", "k"), Some(""));
        let reloaded = IniDocument::parse(&doc.to_ini_string());
        assert_eq!(reloaded.read_raw("s", "k"), None);
    }

    #[test]
    fn test_display_matches_default_serialization() {
        let doc = IniDocument::parse("[a]\nk=v\n");
        assert_eq!(doc.to_string(), doc.to_ini_string());
    }
}
