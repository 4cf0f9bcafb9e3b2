//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Clone Hero playtime calculator.
///
/// Scans a directory of Clone Hero log files, infers one play session per
/// file (open marker from the log text, close from the file's modified
/// time), and prints total playtime with a chronological breakdown.
#[derive(Debug, Parser)]
#[command(name = "chp", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing Clone Hero log files.
    ///
    /// Overrides the configured directory; defaults to ./logs.
    pub log_dir: Option<PathBuf>,

    /// Print the report as JSON instead of the human-readable summary.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
