//! Constants used throughout the INI library

// Structural characters
pub const COMMENT_MARKER: char = ';';
pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';
pub const PARENT_SEPARATOR: char = ':';
pub const KEY_VALUE_SEPARATOR: char = '=';
pub const DOUBLE_QUOTE: char = '"';

/// A section whose declared name starts with this marker is abstract
pub const ABSTRACT_MARKER: char = '_';

/// Characters stripped from both ends of a header line before it is split
pub const HEADER_TRIM_CHARS: &[char] = &[OPEN_BRACKET, CLOSE_BRACKET, ' ', '\t', PARENT_SEPARATOR];

/// Whitespace trimmed from both ends of every physical line
pub const LINE_TRIM_CHARS: &[char] = &[' ', '\t'];

// Line endings
pub const CRLF: &str = "\r\n";
pub const LF: &str = "\n";
pub const CARRIAGE_RETURN: char = '\r';
pub const NEWLINE: char = '\n';

/// UTF-8 byte order mark, stripped when loading files
pub const BOM: char = '\u{feff}';

// Literals
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

/// Separator used by the array accessors when none is given
pub const DEFAULT_SEPARATOR: char = ',';
