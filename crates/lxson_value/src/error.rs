//! Error types for the value system and the LxSON parser.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// The main error type for value and parse operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for an operation the value's active kind does not support.
    #[must_use]
    pub fn wrong_kind(operation: &'static str, kind: Kind) -> Self {
        Self::new(ErrorKind::Type { operation, kind })
    }

    /// Creates an out-of-bounds array write error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::new(ErrorKind::Index { index, size })
    }

    /// Creates a rejected decorated-map write error.
    #[must_use]
    pub fn validation(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Creates a parse error from its detail record.
    #[must_use]
    pub fn parse(detail: ParseDetail) -> Self {
        Self::new(ErrorKind::Parse(detail))
    }

    /// Returns true if this is a parse error.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed LxSON text.
    #[error("{0}")]
    Parse(ParseDetail),

    /// Operation invoked against a value whose active kind does not support it.
    #[error("type error: {kind} value does not support {operation}")]
    Type {
        /// The operation that was attempted.
        operation: &'static str,
        /// The active kind of the value.
        kind: Kind,
    },

    /// Array write outside the permitted range.
    #[error("index out of bounds: {index} (size {size})")]
    Index {
        /// The index that was written.
        index: usize,
        /// The current size of the array.
        size: usize,
    },

    /// Decorated-map write rejected by flags or validator.
    #[error("validation failed for key '{key}': {reason}")]
    Validation {
        /// The key that was written.
        key: String,
        /// Why the write was rejected.
        reason: String,
    },
}

/// Details of a parse failure, including the offending source line.
///
/// The display form reproduces the source line with a caret aligned to the
/// failing column, which is the primary debugging aid for content authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDetail {
    /// Description of what went wrong.
    pub message: String,
    /// Source name for context, if one was supplied.
    pub file: Option<String>,
    /// Line number (1-indexed, offset included).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// The full text of the source line where the error occurred.
    pub source_line: String,
}

impl ParseDetail {
    /// Returns the caret marker aligned to the failing column.
    #[must_use]
    pub fn caret(&self) -> String {
        let pad = (self.column as usize).saturating_sub(1);
        let mut marker = " ".repeat(pad);
        marker.push('^');
        marker
    }
}

impl fmt::Display for ParseDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(
                f,
                "parse error in {file} at line {}, column {}: {}",
                self.line, self.column, self.message
            )?,
            None => write!(
                f,
                "parse error at line {}, column {}: {}",
                self.line, self.column, self.message
            )?,
        }
        writeln!(f)?;
        writeln!(f, "    {}", self.source_line)?;
        write!(f, "    {}", self.caret())
    }
}
