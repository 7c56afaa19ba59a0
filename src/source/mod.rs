//! Sources of allocation rows.
//!
//! The compiler never touches files itself; it consumes rows through the
//! [`AllocationSource`] trait. A CSV export of the ITU series sheet is
//! supported out of the box, and plain row vectors work for tests and
//! embedding.

pub mod csv;

pub use self::csv::CsvSource;

use crate::domain::AllocationRow;
use crate::error::{CallsignError, CallsignResult};

/// Expected label of the range column.
pub const SERIES_HEADER: &str = "Series";
/// Expected label of the country column.
pub const COUNTRY_HEADER: &str = "Allocated to";

/// Provider of an ordered sequence of allocation rows.
pub trait AllocationSource {
    /// Returns every data row in table order, header excluded.
    fn rows(&self) -> CallsignResult<Vec<AllocationRow>>;

    /// Human-readable name used in log output.
    fn name(&self) -> &str;
}

impl AllocationSource for Vec<AllocationRow> {
    fn rows(&self) -> CallsignResult<Vec<AllocationRow>> {
        Ok(self.clone())
    }

    fn name(&self) -> &str {
        "in-memory rows"
    }
}

/// Checks that the first two header cells are `Series` and `Allocated to`.
pub fn check_header<S: AsRef<str>>(cells: &[S]) -> CallsignResult<()> {
    let matches = cells.len() >= 2
        && cells[0].as_ref().trim() == SERIES_HEADER
        && cells[1].as_ref().trim() == COUNTRY_HEADER;
    if matches {
        Ok(())
    } else {
        Err(CallsignError::HeaderMismatch {
            found: cells.iter().map(|c| c.as_ref().to_string()).collect(),
        })
    }
}
