//! CLI argument definitions using clap
//!
//! Commands:
//! - mission-control serve [--host H] [--port P] [--database-url U]
//! - mission-control migrate [--database-url U]

use clap::{Parser, Subcommand};

/// mission-control - a small relational API for scientists, planets, and missions
#[derive(Parser, Debug)]
#[command(name = "mission-control")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run migrations and start the HTTP server
    Serve {
        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Database connection string (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Run pending migrations and exit
    Migrate {
        /// Database connection string (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
