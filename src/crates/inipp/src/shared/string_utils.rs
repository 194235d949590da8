//! String manipulation utilities

use crate::constants::{CARRIAGE_RETURN, DOUBLE_QUOTE, NEWLINE};

/// Canonical form of a section or key name: trimmed and lowercased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Converts `\r\n` and lone `\r` line breaks to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace(CARRIAGE_RETURN, "\n")
}

/// Removes one layer of surrounding double quotes, if the value has both
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with(DOUBLE_QUOTE) && value.ends_with(DOUBLE_QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Wraps a value in double quotes when parsing would otherwise alter it
///
/// Parsing trims values and strips one quote layer, so values with edge
/// whitespace or their own surrounding quotes need an extra layer.
pub fn quote_if_needed(value: &str) -> String {
    let edge_whitespace = value != value.trim();
    let already_quoted = strip_quotes(value).len() != value.len();

    if edge_whitespace || already_quoted {
        format!("{}{}{}", DOUBLE_QUOTE, value, DOUBLE_QUOTE)
    } else {
        value.to_string()
    }
}

/// True when the text contains a line break
pub fn has_line_break(text: &str) -> bool {
    text.contains(NEWLINE) || text.contains(CARRIAGE_RETURN)
}
