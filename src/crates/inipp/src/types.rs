//! Core types for the INI library

use crate::constants::{CRLF, LF};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line terminator used when serializing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::CrLf => CRLF,
            LineEnding::Lf => LF,
        }
    }
}

/// How section inheritance is represented in serialized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InheritanceMode {
    /// Keep abstract sections and emit `[name:parent]` headers
    #[default]
    Preserve,
    /// Emit only concrete sections, each carrying its full effective key set
    Flatten,
}

/// Options for serializing a document to INI text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Line terminator (default: `\r\n`)
    pub line_ending: LineEnding,
    /// Inheritance representation (default: preserve)
    pub inheritance: InheritanceMode,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_inheritance(mut self, inheritance: InheritanceMode) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Concrete sections only, inherited values inlined
    pub fn flattened() -> Self {
        Self::default().with_inheritance(InheritanceMode::Flatten)
    }
}

/// Result type alias for INI storage operations
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur at the storage boundary.
///
/// Parsing and value conversion never fail; only reading or writing files does.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Failed to persist {}: {}", .path.display(), .source)]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl IniError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IniError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, IniError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
