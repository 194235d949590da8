//! Typed accessors on top of the raw string store
//!
//! Reads never fail: a missing key, or a stored value that does not convert
//! to the requested type, yields the caller's default.

use crate::codec::{self, IniNumber, IniValue, NumberFormat};
use crate::constants::DEFAULT_SEPARATOR;
use crate::document::IniDocument;

impl IniDocument {
    /// Typed value of `key` as seen from `section`, or `default`
    pub fn get_value<T: IniValue>(&self, section: &str, key: &str, default: T) -> T {
        match self.read_raw(section, key) {
            Some(raw) => codec::from_text(raw, default),
            None => default,
        }
    }

    /// Typed value of `key`, or `T::default()`
    pub fn get_value_or_default<T: IniValue + Default>(&self, section: &str, key: &str) -> T {
        self.get_value(section, key, T::default())
    }

    /// String value of `key`, empty when absent
    pub fn get_string(&self, section: &str, key: &str) -> String {
        self.read_raw(section, key).unwrap_or_default().to_string()
    }

    /// Typed array stored as a `separator`-delimited value.
    ///
    /// A missing or empty value gives an empty vector. Each element is
    /// converted on its own; elements that do not convert become
    /// `T::default()` so positions are preserved.
    pub fn get_value_array<T: IniValue + Default>(
        &self,
        section: &str,
        key: &str,
        separator: char,
    ) -> Vec<T> {
        let raw = self.read_raw(section, key).unwrap_or_default();

        codec::split_array(raw, separator)
            .iter()
            .map(|element| codec::from_text(element, T::default()))
            .collect()
    }

    /// String array using the default `,` separator
    pub fn get_string_array(&self, section: &str, key: &str) -> Vec<String> {
        self.get_value_array(section, key, DEFAULT_SEPARATOR)
    }

    /// Store a typed value in `section` itself. Returns `false` when the
    /// section name or key is empty.
    pub fn set_value<T: IniValue>(&mut self, section: &str, key: &str, value: &T) -> bool {
        self.write_raw(section, key, codec::to_text(value))
    }

    /// Store a numeric value rendered with `format`
    pub fn set_value_formatted<T: IniNumber>(
        &mut self,
        section: &str,
        key: &str,
        value: &T,
        format: &NumberFormat,
    ) -> bool {
        self.write_raw(section, key, codec::to_text_with(value, Some(format)))
    }

    /// Store a typed array as a `separator`-delimited value. An empty slice
    /// stores an empty value.
    pub fn set_value_array<T: IniValue>(
        &mut self,
        section: &str,
        key: &str,
        values: &[T],
        separator: char,
    ) -> bool {
        let elements: Vec<String> = values.iter().map(codec::to_text).collect();
        self.write_raw(section, key, codec::join_array(&elements, separator))
    }
}
