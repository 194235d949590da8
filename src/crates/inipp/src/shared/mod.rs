//! Shared utilities for parsing and serialization

pub mod string_utils;
pub mod validation;

pub use string_utils::*;
pub use validation::*;
