//! CSV export of the ITU call sign series sheet.
//!
//! The first record must be the `Series`, `Allocated to` header; every
//! following non-blank record is one allocation row.

use super::{check_header, AllocationSource};
use crate::domain::AllocationRow;
use crate::error::{CallsignError, CallsignResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads allocation rows from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    name: String,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AllocationSource for CsvSource {
    fn rows(&self) -> CallsignResult<Vec<AllocationRow>> {
        let file = File::open(&self.path).map_err(|e| CallsignError::io(&self.path, e))?;
        read_rows(file)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses CSV text into allocation rows, validating the header first.
///
/// Rows carry the file line they start on; blank lines count.
pub fn read_rows<R: Read>(mut input: R) -> CallsignResult<Vec<AllocationRow>> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(csv::Error::from)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => StringRecord::new(),
    };
    let cells: Vec<&str> = header.iter().collect();
    check_header(cells.as_slice())?;

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = AllocationRow::new(
            record.get(0).unwrap_or_default(),
            record.get(1).unwrap_or_default(),
        );
        rows.push(match record.position() {
            Some(position) => row.with_line(line_at(&text, position.byte() as usize)),
            None => row,
        });
    }
    Ok(rows)
}

/// Line of the first record byte at or after `offset`.
///
/// The reader reports a record's position before skipping blank lines, so
/// any line terminators at `offset` are stepped over first.
fn line_at(text: &str, offset: usize) -> usize {
    let bytes = text.as_bytes();
    let start = offset.min(bytes.len());
    let skipped = bytes[start..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .count();
    bytes[..start + skipped].iter().filter(|&&b| b == b'\n').count() + 1
}
