//! Data Dragon client: live game version and champion list, converted to a [`Roster`].
//!
//! External endpoints (relative to the configured base URL):
//! - `/realms/<realm>.json` – `n.champion` is the live champion data version
//! - `/cdn/<version>/data/en_US/champion.json` – champion id, key and name
//! - `/cdn/<version>/img/champion/<id>.png` – icon URL stored in the roster

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use quote_core::{QuoteError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use storage::{Roster, RosterEntry};
use tracing::{info, warn};

/// Realm name for a platform region: lowercase with trailing digits removed (`na1` → `na`).
pub fn realm_for_region(region: &str) -> String {
    region
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_ascii_lowercase()
}

#[derive(Debug, Deserialize)]
struct Realm {
    n: RealmVersions,
}

#[derive(Debug, Deserialize)]
struct RealmVersions {
    champion: String,
}

#[derive(Debug, Deserialize)]
struct ChampionData {
    version: String,
    data: HashMap<String, Champion>,
}

#[derive(Debug, Deserialize)]
struct Champion {
    id: String,
    key: String,
    name: String,
}

/// Local roster version vs live Data Dragon version. Either may be unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    pub local: Option<String>,
    pub live: Option<String>,
}

impl VersionCheck {
    /// True when a live version is known and differs from the local one.
    pub fn needs_update(&self) -> bool {
        match &self.live {
            Some(live) => self.local.as_ref() != Some(live),
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataDragonClient {
    client: Client,
    base_url: String,
    region: String,
}

impl DataDragonClient {
    pub fn new(base_url: &str, region: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            region: region.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::Fetch(format!("{}: {}", url, e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| QuoteError::Fetch(format!("{}: {}", url, e)))
    }

    /// Live champion data version for the configured region.
    pub async fn live_version(&self) -> Result<String> {
        let url = format!("{}/realms/{}.json", self.base_url, realm_for_region(&self.region));
        let realm: Realm = self.get_json(&url).await?;
        Ok(realm.n.champion)
    }

    /// Downloads the champion list for `version` as a roster sorted by numeric key.
    pub async fn download_roster(&self, version: &str) -> Result<Roster> {
        let url = format!("{}/cdn/{}/data/en_US/champion.json", self.base_url, version);
        let champions: ChampionData = self.get_json(&url).await?;

        let entries = champions
            .data
            .into_values()
            .map(|c| -> Result<RosterEntry> {
                let id = c.key.parse::<u32>().map_err(|_| {
                    QuoteError::Fetch(format!("Invalid champion key for {}: {}", c.id, c.key))
                })?;
                Ok(RosterEntry {
                    id,
                    icon: format!(
                        "{}/cdn/{}/img/champion/{}.png",
                        self.base_url, champions.version, c.id
                    ),
                    name_id: c.id,
                    name: c.name,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(version = %champions.version, champions = entries.len(), "Champion data downloaded");
        Ok(Roster::new(champions.version, entries))
    }

    /// Compares the roster file's version with the live one. Lookup failures are logged and reported as unknown.
    pub async fn check_versions(&self, roster_path: &Path) -> VersionCheck {
        let local = Roster::local_version(roster_path).unwrap_or_else(|e| {
            warn!(path = %roster_path.display(), error = %e, "Could not read local roster version");
            None
        });
        let live = match self.live_version().await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = %e, "Could not fetch live Data Dragon version");
                None
            }
        };
        VersionCheck { local, live }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realm_for_region() {
        assert_eq!(realm_for_region("na1"), "na");
        assert_eq!(realm_for_region("EUW1"), "euw");
        assert_eq!(realm_for_region("kr"), "kr");
    }

    #[test]
    fn test_needs_update() {
        let check = |local: Option<&str>, live: Option<&str>| VersionCheck {
            local: local.map(str::to_string),
            live: live.map(str::to_string),
        };
        assert!(check(None, Some("14.1.1")).needs_update());
        assert!(check(Some("13.24.1"), Some("14.1.1")).needs_update());
        assert!(!check(Some("14.1.1"), Some("14.1.1")).needs_update());
        assert!(!check(Some("14.1.1"), None).needs_update());
        assert!(!check(None, None).needs_update());
    }
}
