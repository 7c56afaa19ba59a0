//! Persistence of compiled allocations.
//!
//! Writes five files into an output directory:
//!
//! - `callsigns.regex`: the global pattern on one line
//! - `prefixes.dense.json` / `prefixes.pretty.json`: prefix → group
//! - `countries.dense.json` / `countries.pretty.json`: country → prefixes

use crate::compiler::CompiledAllocations;
use crate::error::{CallsignError, CallsignResult};
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

pub const PATTERN_FILE: &str = "callsigns.regex";
pub const PREFIXES_DENSE_FILE: &str = "prefixes.dense.json";
pub const PREFIXES_PRETTY_FILE: &str = "prefixes.pretty.json";
pub const COUNTRIES_DENSE_FILE: &str = "countries.dense.json";
pub const COUNTRIES_PRETTY_FILE: &str = "countries.pretty.json";

/// Default output directory of the command-line tool.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Writes compiled allocations to disk.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes every artifact, creating the directory if needed.
    ///
    /// Returns the paths written, in a fixed order.
    pub fn write(&self, compiled: &CompiledAllocations) -> CallsignResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir).map_err(|e| CallsignError::io(&self.dir, e))?;

        let table = compiled.table();
        let written = vec![
            self.write_file(PATTERN_FILE, format!("{}\n", compiled.pattern()).into_bytes())?,
            self.write_file(PREFIXES_DENSE_FILE, to_dense(table.prefixes())?)?,
            self.write_file(PREFIXES_PRETTY_FILE, to_pretty(table.prefixes())?)?,
            self.write_file(COUNTRIES_DENSE_FILE, to_dense(table.countries())?)?,
            self.write_file(COUNTRIES_PRETTY_FILE, to_pretty(table.countries())?)?,
        ];

        debug!("wrote {} artifacts", written.len());
        Ok(written)
    }

    fn write_file(&self, name: &str, contents: Vec<u8>) -> CallsignResult<PathBuf> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|e| CallsignError::io(&path, e))?;
        Ok(path)
    }
}

fn to_dense<T: Serialize + ?Sized>(value: &T) -> CallsignResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Four-space indented JSON.
fn to_pretty<T: Serialize + ?Sized>(value: &T) -> CallsignResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(out)
}
