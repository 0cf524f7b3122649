//! CLI module for mission-control
//!
//! Provides the command-line interface:
//! - serve: run migrations and start the HTTP server
//! - migrate: run pending migrations and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{connect, run_command};
pub use errors::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Parse arguments, initialize logging, and dispatch.
pub fn run() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse_args();
    commands::run_command(cli)
}
