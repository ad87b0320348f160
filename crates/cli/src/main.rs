//! Decode-table generator CLI.
//!
//! Reads the instruction-decode table and prints the fixed-width listing for
//! the core's Chisel decode source. This is a local, interactive
//! regeneration tool: every invocation recomputes the whole listing from the
//! input file, and any error aborts with a message and a non-zero exit. The
//! fix is always to repair the table and rerun.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use powgen_core::{DecodeTable, TableError, generate};

#[derive(Parser, Debug)]
#[command(
    name = "powgen",
    version,
    about = "Generate the fixed-width instruction-decode listing",
    long_about = "Reads the instruction-decode table (instructions.yaml by default) and prints a column-aligned listing for inclusion in the core's decode source.\n\nExamples:\n  powgen\n  powgen decode/instructions.yaml\n  powgen -o decode_table.txt"
)]
struct Cli {
    /// Decode table to read.
    #[arg(default_value = "instructions.yaml")]
    input: PathBuf,

    /// Write the listing to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging (field discovery, table load).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Loads the table and writes the listing to the selected destination.
fn run(cli: &Cli) -> Result<(), TableError> {
    let table = DecodeTable::load(&cli.input)?;

    let mut out: BufWriter<Box<dyn Write>> = match &cli.output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(io::stdout().lock())),
    };
    generate(&table, &mut out)?;
    out.flush()?;
    Ok(())
}
