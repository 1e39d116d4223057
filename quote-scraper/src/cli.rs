//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quotes")]
#[command(about = "Champion voice-line scraper: extract, roster, parse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every roster champion's audio page and write the quote export.
    Extract {
        /// Roster file (overrides ROSTER_PATH).
        #[arg(short, long)]
        roster: Option<PathBuf>,
        /// Export file (overrides QUOTES_EXPORT_PATH).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only extract these champions (display names); repeatable.
        #[arg(long)]
        only: Vec<String>,
    },
    /// Refresh the champion roster from Data Dragon when the live version changed.
    Roster {
        /// Download even if the local version is current.
        #[arg(short, long)]
        force: bool,
    },
    /// Expand a local markup file and print its quotes as JSON.
    Parse {
        file: PathBuf,
        /// Use the nested dual-speaker grammar.
        #[arg(long)]
        dialogue: bool,
    },
}
