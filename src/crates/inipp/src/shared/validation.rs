//! Validation utilities

use crate::constants::{
    COMMENT_MARKER, HEADER_TRIM_CHARS, KEY_VALUE_SEPARATOR, OPEN_BRACKET, PARENT_SEPARATOR,
};
use crate::shared::string_utils::has_line_break;

/// Checks if a section name survives a serialize/parse round trip
///
/// Header lines are trimmed of brackets, blanks and colons at both ends and
/// split at the first colon, so those must not change the name.
pub fn is_writable_section_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim_matches(HEADER_TRIM_CHARS) == name
        && !name.contains(PARENT_SEPARATOR)
        && !has_line_break(name)
}

/// Checks if a key survives a serialize/parse round trip
pub fn is_writable_key(key: &str) -> bool {
    !key.trim().is_empty()
        && key == key.trim()
        && !key.contains(KEY_VALUE_SEPARATOR)
        && !key.starts_with(OPEN_BRACKET)
        && !key.starts_with(COMMENT_MARKER)
        && !has_line_break(key)
}

/// Checks if a value can be written on a single line
pub fn is_writable_value(value: &str) -> bool {
    !value.is_empty() && !has_line_break(value)
}
