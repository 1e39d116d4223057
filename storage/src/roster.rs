//! Champion roster: the ordered subject list fed to extraction.
//!
//! On disk:
//! `{"type": "champion", "version": "14.1.1", "data": {"1": {"id": 1, "name_id": "Annie", "name": "Annie", "icon": "..."}}}`
//! Entries are kept sorted by numeric id, both in memory and when written.

use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use quote_core::Subject;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::info;

use crate::error::StorageError;
use crate::json_file::write_json_atomic;

/// One champion in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name_id: String,
    pub name: String,
    pub icon: String,
}

impl RosterEntry {
    pub fn to_subject(&self) -> Subject {
        Subject::new(&self.name, &self.name_id, &self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    #[serde(with = "entries_by_id")]
    pub data: Vec<RosterEntry>,
}

impl Roster {
    /// Builds a roster, sorting entries by id.
    pub fn new(version: impl Into<String>, mut data: Vec<RosterEntry>) -> Self {
        data.sort_by_key(|e| e.id);
        Self {
            kind: "champion".to_string(),
            version: version.into(),
            data,
        }
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Io(e),
        })?;
        let roster: Roster = serde_json::from_str(&content)?;
        info!(path = %path.display(), version = %roster.version, champions = roster.data.len(), "Roster loaded");
        Ok(roster)
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        write_json_atomic(path, self)?;
        info!(path = %path.display(), version = %self.version, champions = self.data.len(), "Roster written");
        Ok(())
    }

    /// Version recorded in the roster file, or None if the file does not exist.
    pub fn local_version(path: &Path) -> Result<Option<String>, StorageError> {
        match Self::load(path) {
            Ok(roster) => Ok(Some(roster.version)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Subjects in roster order.
    pub fn subjects(&self) -> Vec<Subject> {
        self.data.iter().map(RosterEntry::to_subject).collect()
    }
}

/// `data` is a JSON object keyed by the decimal id; in memory it is a Vec sorted by id.
mod entries_by_id {
    use super::*;

    pub fn serialize<S: Serializer>(entries: &[RosterEntry], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for entry in entries {
            map.serialize_entry(&entry.id.to_string(), entry)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RosterEntry>, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Vec<RosterEntry>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of champion id to roster entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut by_id: HashMap<u32, RosterEntry> = HashMap::new();
                while let Some((_key, entry)) = access.next_entry::<String, RosterEntry>()? {
                    by_id.insert(entry.id, entry);
                }
                let mut entries: Vec<_> = by_id.into_values().collect();
                entries.sort_by_key(|e| e.id);
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
