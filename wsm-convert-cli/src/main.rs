//! WSM → WWB Converter CLI
//!
//! This is the command-line front end for the wsm-convert library. It
//! owns everything the library does not: argument parsing, the optional
//! TOML job file, logging setup and user-facing messages. The library
//! does the actual work through its `Session` type.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use wsm_convert::{ConvertError, Session};

mod config;

/// Convert WSM frequency-scan exports to WWB import files
#[derive(Parser, Debug)]
#[command(name = "wsm-convert-cli")]
#[command(about = "Convert WSM frequency-scan CSV exports to WWB import files", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the WSM .csv export to convert
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Destination path for the WWB import file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only validate the input, do not convert
    #[arg(long)]
    check: bool,

    /// Path to a TOML job file naming input and output
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("WSM to WWB converter v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using converter library v{}", wsm_convert::VERSION);

    if let Some(input) = &args.input {
        if args.check {
            check_input(input)
        } else {
            let output = match &args.output {
                Some(path) => path.clone(),
                None => default_output_path(input),
            };
            convert(input, &output)
        }
    } else if let Some(config_path) = &args.config {
        // Job file mode - paths come from TOML, -o still wins
        let job = config::load_config(config_path)?;
        let output = match (&args.output, job.output) {
            (Some(path), _) => path.clone(),
            (None, Some(out)) => out.file,
            (None, None) => default_output_path(&job.input.file),
        };
        convert(&job.input.file, &output)
    } else {
        // No arguments - show quick start
        println!("WSM to WWB converter - no input specified");
        println!("\nQuick Start:");
        println!("  wsm-convert-cli scan.csv -o scan_wwb.csv");
        println!("  wsm-convert-cli scan.csv --check");
        println!("  wsm-convert-cli --config job.toml");
        println!("\nUse --help for more options");
        Ok(())
    }
}

/// Validate only - the CLI analogue of a GUI enabling its convert button
fn check_input(input: &Path) -> Result<()> {
    let mut session = Session::new();
    match session.open(input) {
        Ok(()) => {
            println!("✓ {} is a recognized WSM export", input.display());
            if let Some(rows) = session.row_count() {
                log::info!("{} rows loaded", rows);
            }
            Ok(())
        }
        Err(e @ ConvertError::FormatMismatch(_)) => {
            println!("✗ {}: {}", input.display(), e);
            bail!("validation failed");
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", input)),
    }
}

/// One-shot conversion: open, validate, transform, write
fn convert(input: &Path, output: &Path) -> Result<()> {
    let mut session = Session::new();
    session
        .open(input)
        .with_context(|| format!("Failed to load WSM export {:?}", input))?;
    session
        .export(output)
        .with_context(|| format!("Failed to write WWB file {:?}", output))?;

    println!("✓ Saved WWB import file: {}", output.display());
    Ok(())
}

/// Default destination next to the input: scan.csv → scan_wwb.csv
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scan");
    input.with_file_name(format!("{}_wwb.csv", stem))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
