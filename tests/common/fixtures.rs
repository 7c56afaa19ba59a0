//! Allocation table fixtures.
//!
//! Provides a builder for synthetic series tables, following the Builder
//! pattern for clean test setup.

use anyhow::Result;
use callsign_regex::AllocationRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for synthetic allocation tables.
///
/// # Example
///
/// ```no_run
/// let rows = TableFixture::new()
///     .with_range("KAA - KAZ", "Koreaish")
///     .with_full_letter('W', "Testland")
///     .rows();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableFixture {
    rows: Vec<AllocationRow>,
}

impl TableFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row.
    pub fn with_range(mut self, series: &str, country: &str) -> Self {
        self.rows.push(AllocationRow::new(series, country));
        self
    }

    /// Adds the 26 full rows `LAA - LAZ` .. `LZA - LZZ` for `letter`.
    pub fn with_full_letter(self, letter: char, country: &str) -> Self {
        self.with_full_letter_except(letter, country, None)
    }

    /// Like [`Self::with_full_letter`], with one second letter given to
    /// another country.
    pub fn with_full_letter_except(
        mut self,
        letter: char,
        country: &str,
        exception: Option<(char, &str)>,
    ) -> Self {
        for second in 'A'..='Z' {
            let owner = match exception {
                Some((s, other)) if s == second => other,
                _ => country,
            };
            self.rows.push(AllocationRow::new(
                format!("{l}{s}A - {l}{s}Z", l = letter, s = second),
                owner,
            ));
        }
        self
    }

    /// A small table resembling real ITU data.
    pub fn sample() -> Self {
        Self::new()
            .with_range("3DA - 3DM", "Eswatini (Kingdom of)")
            .with_range("3DN - 3DZ", "Fiji (Republic of)")
            .with_range("4XA - 4XZ", "Israel (State of)")
            .with_range("DAA - DAZ", "Germany (Federal Republic of)")
            .with_range("DBA - DBZ", "Germany (Federal Republic of)")
            .with_range("VEA - VEZ", "Canada")
            .with_full_letter('K', "United States of America")
    }

    pub fn rows(&self) -> Vec<AllocationRow> {
        self.rows.clone()
    }

    /// Rows in reverse order.
    pub fn reversed_rows(&self) -> Vec<AllocationRow> {
        self.rows.iter().rev().cloned().collect()
    }

    /// Renders the rows as a CSV export with the standard header.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Series,Allocated to\n");
        for row in &self.rows {
            out.push_str(&format!("{},\"{}\"\n", row.series, row.country));
        }
        out
    }

    /// Writes the CSV export to `dir/name` and returns its path.
    pub fn write_csv(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, self.to_csv())?;
        Ok(path)
    }
}
