pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// ghost-rdp backend CLI
///
/// Serves the management API, applies database migrations and prunes the audit log.
pub struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true, env = "GHOSTRDP_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Migrate the database and start the HTTP API
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Delete audit entries older than the given number of days
    PruneAudit {
        /// Age in days; entries older than this are removed
        #[arg(long)]
        days: i64,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
