//! Allocation-table compiler.
//!
//! Compilation is a single fold over the input rows:
//!
//! 1. every row is validated and expanded into its atomic prefixes
//!    ([`TableBuilder`]),
//! 2. fully allocated single-country first letters are collapsed
//!    ([`consolidate`]),
//! 3. the surviving fragments are assembled into one pattern
//!    ([`assemble`]).
//!
//! The result is an immutable [`CompiledAllocations`] snapshot.

pub mod builder;
pub mod consolidate;
pub mod pattern;

pub use builder::TableBuilder;
pub use consolidate::consolidate;
pub use pattern::{assemble, CALLSIGN_SUFFIX};

use crate::domain::{AllocationRow, AllocationTable, CallsignMatcher, Letter};
use crate::error::CallsignResult;
use crate::source::AllocationSource;
use log::info;
use regex::Regex;

/// What to do when two rows produce the same prefix key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Abort with [`crate::CallsignError::ConflictingAllocation`]
    #[default]
    Reject,
    /// Later rows replace earlier ones
    Overwrite,
}

/// Options controlling a compilation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub duplicate_policy: DuplicatePolicy,
    pub consolidate: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            consolidate: true,
        }
    }
}

impl CompileOptions {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_consolidation(mut self, consolidate: bool) -> Self {
        self.consolidate = consolidate;
        self
    }
}

/// Output of a successful compilation.
#[derive(Debug, Clone)]
pub struct CompiledAllocations {
    table: AllocationTable,
    pattern: String,
    regex: Regex,
    consolidated: Vec<Letter>,
}

impl CompiledAllocations {
    /// The pattern text, unanchored, as written to `callsigns.regex`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn table(&self) -> &AllocationTable {
        &self.table
    }

    /// First letters collapsed into single-letter prefixes.
    pub fn consolidated_letters(&self) -> &[Letter] {
        &self.consolidated
    }

    pub fn matcher(&self) -> CallsignMatcher<'_> {
        CallsignMatcher::new(&self.regex, &self.table)
    }
}

/// Compiler service turning allocation rows into a [`CompiledAllocations`].
#[derive(Debug, Clone, Default)]
pub struct AllocationCompiler {
    options: CompileOptions,
}

impl AllocationCompiler {
    /// Creates a compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compiles `rows` in order. Any malformed or conflicting row aborts the
    /// whole run; no partial result is returned.
    ///
    /// Diagnostics name a row by its source line when the row carries one,
    /// otherwise by its 1-based position in `rows`.
    pub fn compile(&self, rows: &[AllocationRow]) -> CallsignResult<CompiledAllocations> {
        let mut builder = TableBuilder::new(self.options.duplicate_policy);
        for (index, row) in rows.iter().enumerate() {
            builder.add_row(row.line.unwrap_or(index + 1), row)?;
        }

        let consolidated = if self.options.consolidate {
            consolidate(&mut builder)
        } else {
            Vec::new()
        };

        let table = builder.build();
        let pattern = assemble(&table);
        let regex = Regex::new(&format!("^(?:{})", pattern))?;

        info!(
            "compiled {} rows into {} prefixes for {} countries ({} letters consolidated)",
            rows.len(),
            table.len(),
            table.countries().len(),
            consolidated.len()
        );

        Ok(CompiledAllocations {
            table,
            pattern,
            regex,
            consolidated,
        })
    }

    /// Reads every row from `source` and compiles them.
    pub fn compile_source(
        &self,
        source: &dyn AllocationSource,
    ) -> CallsignResult<CompiledAllocations> {
        let rows = source.rows()?;
        info!("read {} rows from {}", rows.len(), source.name());
        self.compile(&rows)
    }
}
