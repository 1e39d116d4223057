//! Fetch collaborator: raw audio-page markup over HTTP.
//!
//! [`WikiSource`] is the seam the orchestrator depends on; [`WikiClient`] implements it with reqwest
//! against the wiki's `?action=raw` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use quote_core::{QuoteError, Result};
use reqwest::Client;
use tracing::debug;

/// Source of raw audio-page markup, keyed by fetch identifier (spaces already replaced by `_`).
#[async_trait]
pub trait WikiSource: Send + Sync {
    /// Locator for the identifier; used in fetch requests and diagnostics.
    fn locator(&self, identifier: &str) -> String;
    /// Returns the raw markup or a transport / status error.
    async fn fetch(&self, identifier: &str) -> Result<String>;
}

/// reqwest-based wiki client.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    base_url: String,
}

impl WikiClient {
    /// Creates a client for `base_url` (e.g. `https://leagueoflegends.fandom.com/wiki`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WikiSource for WikiClient {
    fn locator(&self, identifier: &str) -> String {
        format!("{}/{}/LoL/Audio?action=raw", self.base_url, identifier)
    }

    async fn fetch(&self, identifier: &str) -> Result<String> {
        let url = self.locator(identifier);
        debug!(url = %url, "Fetching audio page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Fetch(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .text()
            .await
            .map_err(|e| QuoteError::Fetch(format!("{}: {}", url, e)))
    }
}
