//! quotes CLI: extract champion quotes, refresh the roster, or parse a local page. Config from env and CLI args.

use anyhow::Result;
use clap::Parser;
use quote_core::init_tracing;
use quote_scraper::{parse_file, refresh_roster, run_extract, Cli, Commands, ScraperConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { roster, output, only } => {
            let config = ScraperConfig::load()?.with_paths(roster, output);
            config.validate()?;
            init_tracing(&config.log_file)?;

            let summary = run_extract(&config, &only).await?;
            println!(
                "Subjects: {}, Quotes: {}, Empty: {}, Failed: {}",
                summary.subjects,
                summary.quotes,
                summary.empty.len(),
                summary.failed.len()
            );
            Ok(())
        }
        Commands::Roster { force } => {
            let config = ScraperConfig::load()?;
            config.validate()?;
            init_tracing(&config.log_file)?;

            if refresh_roster(&config, force).await? {
                println!("Roster written to {}", config.roster_path.display());
            } else {
                println!("Roster already current ({})", config.roster_path.display());
            }
            Ok(())
        }
        Commands::Parse { file, dialogue } => {
            // No tracing here: stdout carries the JSON output.
            println!("{}", parse_file(&file, dialogue)?);
            Ok(())
        }
    }
}
