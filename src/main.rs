//! component-hint CLI - lint a graph of component.json components
//!
//! Usage: component-hint [OPTIONS] [COMPONENT_PATH]...
//!
//! Exit status:
//!   0  no errors (warnings allowed)
//!   1  at least one error finding
//!   2  the run could not start (bad arguments, paths or config)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use component_hint::presentation::Cli;

mod commands;

/// Overrides the verbosity-derived log filter when set.
const LOG_ENV: &str = "COMPONENT_HINT_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match commands::lint::run(&cli) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
