//! # Tix CLI Entry Point
//!
//! The main entry point for the tix command-line tool, which views,
//! transitions, and links Jira tickets.

use std::process::ExitCode;

use clap::Parser;
use tix_cli::cli::{Cli, handle_cli, report_error};
use tracing::{debug, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  // Values already in the environment win over .env
  let dotenv = dotenvy::dotenv();

  // Parse CLI arguments using the derive-based implementation
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Initialize the tracing subscriber with the specified level
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match dotenv {
    Ok(path) => debug!(path = %path.display(), "Loaded .env"),
    Err(e) if e.not_found() => {}
    Err(e) => warn!("Failed to load .env: {e}"),
  }

  match handle_cli(cmd) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      report_error(&err);
      ExitCode::FAILURE
    }
  }
}
