//! Conversion between INI text and typed values
//!
//! Every conversion here is total: malformed input is reported as `None` by
//! [`IniValue::from_ini_text`] and turned into a caller-supplied default by
//! [`from_text`]. Nothing in this module returns an error or panics.
//!
//! Empty text is malformed for every type except `String`, where it is a
//! valid empty string and never falls back to the default.
//!
//! Numbers use a fixed, locale-independent representation: `.` as the
//! decimal point and no grouping separators.

pub mod array;
pub mod format;
mod macros;

pub use array::{join_array, split_array};
pub use format::NumberFormat;

use crate::constants::{FALSE_LITERAL, TRUE_LITERAL};

/// A value that can be stored in and read back from an INI document
pub trait IniValue: Sized {
    /// Render the value as INI text
    fn to_ini_text(&self) -> String;

    /// Parse INI text, returning `None` when the text is not a valid `Self`
    fn from_ini_text(text: &str) -> Option<Self>;
}

/// A numeric value that can also be rendered with a [`NumberFormat`]
pub trait IniNumber: IniValue {
    fn to_ini_text_with(&self, format: &NumberFormat) -> String;
}

/// Render a value as INI text
pub fn to_text<T: IniValue>(value: &T) -> String {
    value.to_ini_text()
}

/// Render a numeric value with an optional format specifier
pub fn to_text_with<T: IniNumber>(value: &T, format: Option<&NumberFormat>) -> String {
    match format {
        Some(format) => value.to_ini_text_with(format),
        None => value.to_ini_text(),
    }
}

/// Parse INI text, falling back to `default` on any failure.
///
/// Empty text counts as a failure for numbers, booleans and enums. For
/// `String` it parses to `""`, so the default is not used.
pub fn from_text<T: IniValue>(text: &str, default: T) -> T {
    T::from_ini_text(text).unwrap_or(default)
}

/// Text is taken verbatim; empty text is a valid empty string
impl IniValue for String {
    fn to_ini_text(&self) -> String {
        self.clone()
    }

    fn from_ini_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl IniValue for bool {
    fn to_ini_text(&self) -> String {
        let literal = if *self { TRUE_LITERAL } else { FALSE_LITERAL };
        literal.to_string()
    }

    fn from_ini_text(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_integer {
    ($($ty:ty),+) => {
        $(
            impl IniValue for $ty {
                fn to_ini_text(&self) -> String {
                    self.to_string()
                }

                fn from_ini_text(text: &str) -> Option<Self> {
                    text.trim().parse::<$ty>().ok()
                }
            }

            impl IniNumber for $ty {
                fn to_ini_text_with(&self, format: &NumberFormat) -> String {
                    format.format_integer(*self as i128)
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($ty:ty),+) => {
        $(
            impl IniValue for $ty {
                fn to_ini_text(&self) -> String {
                    self.to_string()
                }

                fn from_ini_text(text: &str) -> Option<Self> {
                    text.trim().parse::<$ty>().ok()
                }
            }

            impl IniNumber for $ty {
                fn to_ini_text_with(&self, format: &NumberFormat) -> String {
                    match format {
                        NumberFormat::General => self.to_ini_text(),
                        _ => format.format_float(f64::from(*self)),
                    }
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float!(f32, f64);
