//! Scraper config: wiki and Data Dragon endpoints, roster/export paths, log file, HTTP timeout.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WIKI_BASE_URL: &str = "https://leagueoflegends.fandom.com/wiki";
pub const DEFAULT_DATA_DRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// WIKI_BASE_URL; audio pages live at `<base>/<identifier>/LoL/Audio?action=raw`
    pub wiki_base_url: String,
    /// DATA_DRAGON_URL
    pub data_dragon_url: String,
    /// DATA_DRAGON_REGION (platform id, e.g. na1)
    pub data_dragon_region: String,
    /// ROSTER_PATH
    pub roster_path: PathBuf,
    /// QUOTES_EXPORT_PATH
    pub export_path: PathBuf,
    /// LOG_FILE
    pub log_file: String,
    /// HTTP_TIMEOUT_SECS
    pub http_timeout_secs: u64,
}

impl ScraperConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let wiki_base_url =
            env::var("WIKI_BASE_URL").unwrap_or_else(|_| DEFAULT_WIKI_BASE_URL.to_string());
        let data_dragon_url =
            env::var("DATA_DRAGON_URL").unwrap_or_else(|_| DEFAULT_DATA_DRAGON_URL.to_string());
        let data_dragon_region =
            env::var("DATA_DRAGON_REGION").unwrap_or_else(|_| "na1".to_string());
        let roster_path = env::var("ROSTER_PATH")
            .unwrap_or_else(|_| "name_id_dict.json".to_string())
            .into();
        let export_path = env::var("QUOTES_EXPORT_PATH")
            .unwrap_or_else(|_| "quotes_list_export.json".to_string())
            .into();
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/quote-scraper.log".to_string());
        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(s) => s
                .parse()
                .map_err(|_| anyhow::anyhow!("HTTP_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => 30,
        };

        Ok(Self {
            wiki_base_url,
            data_dragon_url,
            data_dragon_region,
            roster_path,
            export_path,
            log_file,
            http_timeout_secs,
        })
    }

    /// Applies CLI path overrides.
    pub fn with_paths(mut self, roster: Option<PathBuf>, export: Option<PathBuf>) -> Self {
        if let Some(roster) = roster {
            self.roster_path = roster;
        }
        if let Some(export) = export {
            self.export_path = export;
        }
        self
    }

    /// Validate config (URLs must parse, timeout must be non-zero).
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("WIKI_BASE_URL", &self.wiki_base_url),
            ("DATA_DRAGON_URL", &self.data_dragon_url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("{} is not a valid URL: {}", name, url);
            }
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
