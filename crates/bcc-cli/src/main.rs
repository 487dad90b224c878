//! BCC command-line tool: convert, inspect and validate `.bcc` curve
//! container files.
//!
//! # Command overview
//!
//! ```text
//! bcc <COMMAND> [OPTIONS]
//!
//! Commands:
//!   convert    Decode a BCC file and write it as a JSON document
//!   inspect    Print the header and a per-curve summary
//!   validate   Check a BCC file for structural correctness
//!   help       Print help information
//!
//! Global options:
//!   -v, --verbose    Raise log level (repeat for more: -v info, -vv debug, -vvv trace)
//!   -h, --help       Print help
//!   -V, --version    Print version
//! ```
//!
//! `RUST_LOG` overrides the level chosen by `-v`.
//!
//! # Exit codes
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | Success                                        |
//! | 1    | Error (I/O failure, any decode error, etc.)    |
//!
//! All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod cmd_convert;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The BCC (Binary Curve Container) command-line tool.
#[derive(Parser)]
#[command(name = "bcc", version, about = "Binary Curve Container tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity. Repeatable.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a BCC file and write it as a JSON document.
    Convert(ConvertArgs),
    /// Print the header and a per-curve summary of a BCC file.
    Inspect(InspectArgs),
    /// Check a BCC file for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `bcc convert`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                               │
/// ├─────────────┼──────────────────────────────────────────────────────┤
/// │ -o PATH     │ output path (default: INPUT with a .json extension)  │
/// │ -o -        │ write to stdout                                      │
/// │ --compact   │ single-line JSON instead of 2-space indentation      │
/// └─────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to the `.bcc` file to convert.
    pub input: PathBuf,

    /// Output path. `-` writes to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `bcc inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.bcc` file to inspect.
    pub file: PathBuf,

    /// Show only the curve at this zero-based index.
    #[arg(long)]
    pub curve: Option<usize>,

    /// List every control point of each shown curve.
    #[arg(long)]
    pub points: bool,
}

/// Arguments for `bcc validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.bcc` file to validate.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Convert(args) => cmd_convert::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
