use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chp_cli::render::{format_diagnostic, format_report, format_report_json};
use chp_cli::{Cli, Config};
use chp_core::{Report, scan_sessions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let log_dir = cli.log_dir.unwrap_or(config.log_dir);

    let outcome = scan_sessions(&log_dir)
        .with_context(|| format!("failed to scan {}", log_dir.display()))?;

    for diagnostic in &outcome.diagnostics {
        println!("{}", format_diagnostic(diagnostic));
    }
    if !outcome.diagnostics.is_empty() {
        println!();
    }

    let report = Report::from_sessions(outcome.sessions);

    if cli.json {
        println!("{}", format_report_json(&report)?);
    } else {
        print!("{}", format_report(&report, &Local));
    }

    Ok(())
}
