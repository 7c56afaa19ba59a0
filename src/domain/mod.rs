//! Domain models for call sign allocations.
//!
//! This module contains the types shared by the compiler and the matcher:
//! raw table rows, validated groups, the frozen allocation table and the
//! longest-prefix call sign matcher.

pub mod group;
pub mod letter;
pub mod matcher;
pub mod table;

pub use group::{Allocation, Group, Span};
pub use letter::Letter;
pub use matcher::{CallsignMatcher, MatchOutcome};
pub use table::AllocationTable;

/// One raw row of the series table: a range cell and the country it is
/// allocated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRow {
    /// Range text such as `KAA - KAZ`
    pub series: String,
    pub country: String,
    /// Line of the source file the row was read from, when known
    pub line: Option<usize>,
}

impl AllocationRow {
    pub fn new(series: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            country: country.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}
