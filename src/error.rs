//! Error types for the allocation-table compiler.
//!
//! Every variant here is fatal for a compilation run. Failing to match a
//! call sign is not an error; see [`crate::domain::MatchOutcome`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compiler operations.
pub type CallsignResult<T> = Result<T, CallsignError>;

/// Error type for reading, compiling and persisting an allocation table.
#[derive(Debug, Error)]
pub enum CallsignError {
    /// The first row of the table is not `Series`, `Allocated to`
    #[error("Header mismatch: expected 'Series', 'Allocated to' but found {found:?}")]
    HeaderMismatch { found: Vec<String> },

    /// A range cell violates the three-character / shared-stem / ordering rules.
    /// `row` is the source line for file input, else the 1-based row index.
    #[error("Malformed range '{range}' in row {row}: {reason}")]
    MalformedRange {
        row: usize,
        range: String,
        reason: String,
    },

    /// Two rows produced the same prefix key
    #[error("Prefix '{prefix}' allocated to '{existing}' is claimed again by '{incoming}'")]
    ConflictingAllocation {
        prefix: String,
        existing: String,
        incoming: String,
    },

    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The assembled pattern was rejected by the regex engine
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl CallsignError {
    /// Builds a [`CallsignError::MalformedRange`] for a row.
    pub fn malformed(row: usize, range: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            row,
            range: range.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
