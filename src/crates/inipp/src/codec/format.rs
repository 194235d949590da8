//! Numeric format specifiers
//!
//! A small, locale-independent subset of the usual standard numeric format
//! strings: `F<n>` fixed-point, `E<n>` exponential, `D<n>` minimum integer
//! digits and `G` general. Specifiers are case-insensitive. Anything else
//! falls back to general formatting.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SPECIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([FfEeDdGg])(\d{1,2})?$").unwrap());

const DEFAULT_FIXED_PRECISION: usize = 2;
const DEFAULT_EXPONENT_PRECISION: usize = 6;

/// How a numeric value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest representation that round-trips
    #[default]
    General,
    /// Fixed number of digits after the decimal point
    Fixed(usize),
    /// Scientific notation with a fixed number of mantissa decimals
    Exponential(usize),
    /// Integers zero-padded to a minimum number of digits
    Decimal(usize),
}

impl NumberFormat {
    /// Parse a format specifier such as `F2` or `d4`
    pub fn parse(specifier: &str) -> Self {
        let Some(captures) = SPECIFIER_REGEX.captures(specifier.trim()) else {
            return NumberFormat::General;
        };

        let precision = captures
            .get(2)
            .and_then(|m| m.as_str().parse::<usize>().ok());

        match captures[1].to_ascii_uppercase().as_str() {
            "F" => NumberFormat::Fixed(precision.unwrap_or(DEFAULT_FIXED_PRECISION)),
            "E" => NumberFormat::Exponential(precision.unwrap_or(DEFAULT_EXPONENT_PRECISION)),
            "D" => NumberFormat::Decimal(precision.unwrap_or(1)),
            _ => NumberFormat::General,
        }
    }

    pub fn format_integer(&self, value: i128) -> String {
        match *self {
            NumberFormat::General => value.to_string(),
            NumberFormat::Fixed(precision) => {
                if precision == 0 {
                    value.to_string()
                } else {
                    format!("{}.{}", value, "0".repeat(precision))
                }
            }
            NumberFormat::Exponential(precision) => format!("{:.*e}", precision, value as f64),
            NumberFormat::Decimal(width) => {
                let sign = if value < 0 { "-" } else { "" };
                format!("{}{:0width$}", sign, value.unsigned_abs(), width = width)
            }
        }
    }

    pub fn format_float(&self, value: f64) -> String {
        match *self {
            NumberFormat::Fixed(precision) => format!("{:.*}", precision, value),
            NumberFormat::Exponential(precision) => format!("{:.*e}", precision, value),
            // Zero-padding is only meaningful for integers
            NumberFormat::General | NumberFormat::Decimal(_) => value.to_string(),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::General => write!(f, "G"),
            NumberFormat::Fixed(p) => write!(f, "F{}", p),
            NumberFormat::Exponential(p) => write!(f, "E{}", p),
            NumberFormat::Decimal(w) => write!(f, "D{}", w),
        }
    }
}
