//! Call sign regex CLI application.
//!
//! Compiles a CSV export of the ITU call sign series table, writes the
//! generated pattern and lookup tables, and classifies any call signs given
//! on the command line.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

use callsign_regex::artifacts::DEFAULT_OUTPUT_DIR;
use callsign_regex::{
    AllocationCompiler, ArtifactWriter, CompileOptions, CompiledAllocations, CsvSource,
    DuplicatePolicy,
};

/// ITU call sign series compiler
///
/// Builds a regular expression matching valid call signs, plus
/// prefix/country lookup tables, from the ITU series table.
#[derive(Parser)]
#[command(name = "callsign-regex")]
#[command(version, about = "ITU call sign series compiler", long_about = None)]
struct Cli {
    /// Series table exported as CSV (header: Series, Allocated to)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Call signs to look up
    #[arg(value_name = "CALLSIGN")]
    callsigns: Vec<String>,

    /// Directory receiving the generated regex and JSON tables
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip writing the generated files
    #[arg(long)]
    no_artifacts: bool,

    /// Let later rows replace earlier allocations of the same prefix
    #[arg(long)]
    allow_overwrite: bool,

    /// Keep 26 two-letter entries instead of collapsing them to one letter
    #[arg(long)]
    no_consolidate: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn compile_options(&self) -> CompileOptions {
        let policy = if self.allow_overwrite {
            DuplicatePolicy::Overwrite
        } else {
            DuplicatePolicy::Reject
        };
        CompileOptions::default()
            .with_duplicate_policy(policy)
            .with_consolidation(!self.no_consolidate)
    }
}

/// Compile-and-lookup command handler.
struct LookupHandler {
    compiler: AllocationCompiler,
}

impl LookupHandler {
    fn new(options: CompileOptions) -> Self {
        Self {
            compiler: AllocationCompiler::with_options(options),
        }
    }

    fn compile(&self, input: &Path) -> Result<CompiledAllocations> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let source = CsvSource::new(input);
        info!("reading series table from {}", source.path().display());
        let compiled = self
            .compiler
            .compile_source(&source)
            .with_context(|| format!("Failed to compile {}", input.display()))?;

        for letter in compiled.consolidated_letters() {
            info!("single-letter prefix {}", letter);
        }
        Ok(compiled)
    }

    fn write_artifacts(&self, compiled: &CompiledAllocations, dir: &Path) -> Result<()> {
        let writer = ArtifactWriter::new(dir);
        let written = writer
            .write(compiled)
            .with_context(|| format!("Failed to write artifacts to {}", dir.display()))?;
        for path in &written {
            info!("wrote {}", path.display());
        }
        info!("artifacts in {}", writer.dir().display());
        Ok(())
    }

    fn report(&self, compiled: &CompiledAllocations, callsigns: &[String]) {
        let matcher = compiled.matcher();
        for call in callsigns {
            println!("{}", matcher.describe(call));
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let handler = LookupHandler::new(cli.compile_options());
    let compiled = handler.compile(&cli.input)?;

    if !cli.no_artifacts {
        handler.write_artifacts(&compiled, &cli.output_dir)?;
    }
    handler.report(&compiled, &cli.callsigns);

    Ok(())
}
