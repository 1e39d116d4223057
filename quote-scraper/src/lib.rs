//! # Quote scraper
//!
//! Wires the wiki fetch client, markup pipeline, roster and export storage. Loads config from env
//! and runs the extraction batch, roster refresh, or an offline parse.

pub mod app;
pub mod cli;
pub mod config;
pub mod data_dragon;
pub mod fetch;
pub mod runner;

pub use app::{parse_file, refresh_roster, run_extract};
pub use cli::{Cli, Commands};
pub use config::ScraperConfig;
pub use data_dragon::{realm_for_region, DataDragonClient, VersionCheck};
pub use fetch::{WikiClient, WikiSource};
pub use runner::{collect_quotes, extract_subject, run_extraction, ExtractionSummary};
