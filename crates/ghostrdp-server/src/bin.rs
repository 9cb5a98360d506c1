//! ghost-rdp backend CLI application
//!
//! Loads configuration, installs the logger and runs the requested subcommand.

use ghostrdp_server::cli::{self, commands, Commands};
use ghostrdp_utils::config::Settings;
use ghostrdp_utils::logging::{self, prelude::*};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let cli = cli::parse_cli();

    let config = Settings::new(cli.config.clone())?;

    logging::init_with_format(&config.log.level, &config.log.format)
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;

    match cli.command {
        Commands::Serve => commands::serve(&config).await?,
        Commands::Migrate => commands::migrate(&config)?,
        Commands::PruneAudit { days } => {
            commands::prune_audit(&config, days)?;
        }
    }

    info!("Done");
    Ok(())
}
