//! Command handlers behind the `quotes` binary.

use std::path::Path;

use anyhow::{Context, Result};
use quote_core::Subject;
use storage::{JsonQuoteStore, Roster};
use tracing::{info, warn};
use wiki_markup::{extract_quotes, Grammar};

use crate::config::ScraperConfig;
use crate::data_dragon::DataDragonClient;
use crate::fetch::WikiClient;
use crate::runner::{run_extraction, ExtractionSummary};

/// Keeps roster subjects whose display name is in `only`; an empty filter keeps everything.
pub fn select_subjects(subjects: Vec<Subject>, only: &[String]) -> Vec<Subject> {
    if only.is_empty() {
        return subjects;
    }
    for name in only {
        if !subjects.iter().any(|s| &s.name == name) {
            warn!(subject = %name, "Requested champion is not in the roster");
        }
    }
    subjects
        .into_iter()
        .filter(|s| only.contains(&s.name))
        .collect()
}

/// `quotes extract`: roster → wiki → export file.
pub async fn run_extract(config: &ScraperConfig, only: &[String]) -> Result<ExtractionSummary> {
    let roster = Roster::load(&config.roster_path).with_context(|| {
        format!(
            "Load roster {} (run `quotes roster` first)",
            config.roster_path.display()
        )
    })?;
    let subjects = select_subjects(roster.subjects(), only);
    info!(version = %roster.version, subjects = subjects.len(), "Starting extraction");

    let source = WikiClient::new(&config.wiki_base_url, config.http_timeout())?;
    let sink = JsonQuoteStore::new(&config.export_path);

    let summary = run_extraction(&subjects, &source, &sink)
        .await
        .with_context(|| format!("Write quote export {}", config.export_path.display()))?;
    Ok(summary)
}

/// `quotes roster`: downloads the roster when the live version differs (or `force`). Returns true if written.
pub async fn refresh_roster(config: &ScraperConfig, force: bool) -> Result<bool> {
    let client = DataDragonClient::new(
        &config.data_dragon_url,
        &config.data_dragon_region,
        config.http_timeout(),
    )?;
    let check = client.check_versions(&config.roster_path).await;
    info!(local = ?check.local, live = ?check.live, "Roster versions");

    if !force && !check.needs_update() {
        info!("Roster is up to date");
        return Ok(false);
    }

    let version = match check.live {
        Some(version) => version,
        None => client
            .live_version()
            .await
            .context("Fetch live Data Dragon version")?,
    };
    let roster = client
        .download_roster(&version)
        .await
        .context("Download champion data")?;
    roster
        .save(&config.roster_path)
        .with_context(|| format!("Write roster {}", config.roster_path.display()))?;
    Ok(true)
}

/// `quotes parse`: offline extraction of a local markup file, returned as a pretty JSON array.
pub fn parse_file(path: &Path, dialogue: bool) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Read markup file {}", path.display()))?;
    let grammar = if dialogue {
        Grammar::NestedDialogue
    } else {
        Grammar::Standard
    };
    let quotes = extract_quotes(&raw, grammar);
    Ok(serde_json::to_string_pretty(&quotes)?)
}
