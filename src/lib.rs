//! Compiler for the ITU call sign series table.
//!
//! The ITU publishes call sign prefix allocations as a table of ranges
//! (`KAA - KAZ`, `3DA - 3DM`, ...) mapped to countries. This library turns
//! that table into:
//!
//! - a single regular expression recognizing valid call signs and capturing
//!   their national prefix, and
//! - lookup tables from prefix to country and from country to prefixes.
//!
//! Countries holding all 26 two-letter stems under one first letter are
//! collapsed into a single-letter prefix (`K`, `W`, ...).
//!
//! # Architecture
//!
//! - [`domain`]: rows, groups, the frozen table and the call sign matcher
//! - [`compiler`]: table builder, consolidation pass and pattern assembly
//! - [`source`]: row providers (CSV export of the ITU sheet)
//! - [`artifacts`]: regex and JSON output files
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! use callsign_regex::{AllocationCompiler, AllocationRow};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = vec![
//!     AllocationRow::new("KAA - KAZ", "United States of America"),
//!     AllocationRow::new("3DA - 3DM", "Eswatini (Kingdom of)"),
//! ];
//! let compiled = AllocationCompiler::new().compile(&rows)?;
//!
//! assert_eq!(compiled.pattern(), "(3D[A-M]|KA[A-Z]?)[0-9][0-9A-Z]{0,3}[A-Z]");
//! assert_eq!(
//!     compiled.matcher().describe("ka1abc"),
//!     "ka1abc - United States of America"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Reading a CSV export
//!
//! ```no_run
//! use callsign_regex::{AllocationCompiler, ArtifactWriter, CsvSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let compiled = AllocationCompiler::new().compile_source(&CsvSource::new("CallSignSeriesRanges.csv"))?;
//! ArtifactWriter::new("generated").write(&compiled)?;
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod compiler;
pub mod domain;
pub mod error;
pub mod source;

pub use artifacts::ArtifactWriter;
pub use compiler::{
    AllocationCompiler, CompileOptions, CompiledAllocations, DuplicatePolicy, TableBuilder,
};
pub use domain::{AllocationRow, AllocationTable, CallsignMatcher, Group, MatchOutcome};
pub use error::{CallsignError, CallsignResult};
pub use source::{AllocationSource, CsvSource};
