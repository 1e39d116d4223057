//! Core types: subject, raw page, quote record, per-subject quote set, and the ordered result mapping.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One champion whose voice lines are extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name, also the key in the result mapping (e.g. `Nunu & Willump`).
    pub name: String,
    /// Alternate identifier used when the display name contains `&` (e.g. `Nunu`).
    pub name_id: String,
    /// Icon URL passed through untouched to the output.
    pub icon: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, name_id: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_id: name_id.into(),
            icon: icon.into(),
        }
    }

    /// Identifier used to build the fetch locator: display name, or `name_id` when the display
    /// name contains the `&` conjunction; spaces become underscores.
    pub fn fetch_identifier(&self) -> String {
        let base = if self.name.contains('&') {
            &self.name_id
        } else {
            &self.name
        };
        base.replace(' ', "_")
    }
}

/// Unprocessed markup for one subject, as returned by the fetch collaborator.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub subject: String,
    pub identifier: String,
    pub text: String,
}

impl RawPage {
    pub fn new(subject: &Subject, text: impl Into<String>) -> Self {
        Self {
            subject: subject.name.clone(),
            identifier: subject.fetch_identifier(),
            text: text.into(),
        }
    }
}

/// One extracted utterance. Holds more than one line only for joined dialogue exchanges.
///
/// Serializes as a single string with lines joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    lines: Vec<String>,
}

impl QuoteRecord {
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// Appends a line to the exchange.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Serialize for QuoteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text())
    }
}

/// A subject's quotes and icon. Serialized as `{"quotes": [...], "icon": "..."}`; the name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectQuoteSet {
    #[serde(skip)]
    pub name: String,
    pub quotes: Vec<QuoteRecord>,
    pub icon: String,
}

impl SubjectQuoteSet {
    pub fn new(subject: &Subject, quotes: Vec<QuoteRecord>) -> Self {
        Self {
            name: subject.name.clone(),
            quotes,
            icon: subject.icon.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Subject display name → [`SubjectQuoteSet`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMapping {
    entries: Vec<SubjectQuoteSet>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a set keyed by its name. Re-inserting a name replaces the set in its original position.
    pub fn insert(&mut self, set: SubjectQuoteSet) {
        match self.entries.iter_mut().find(|e| e.name == set.name) {
            Some(existing) => *existing = set,
            None => self.entries.push(set),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SubjectQuoteSet> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubjectQuoteSet> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total quote records across all subjects.
    pub fn total_quotes(&self) -> usize {
        self.entries.iter().map(|e| e.quotes.len()).sum()
    }
}

impl Serialize for ResultMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, name_id: &str) -> Subject {
        Subject::new(name, name_id, format!("https://cdn.example/{}.png", name_id))
    }

    #[test]
    fn test_fetch_identifier_uses_display_name() {
        assert_eq!(subject("Miss Fortune", "MissFortune").fetch_identifier(), "Miss_Fortune");
        assert_eq!(subject("Ahri", "Ahri").fetch_identifier(), "Ahri");
    }

    #[test]
    fn test_fetch_identifier_uses_name_id_for_conjunction() {
        assert_eq!(subject("Nunu & Willump", "Nunu").fetch_identifier(), "Nunu");
    }

    #[test]
    fn test_quote_record_joins_lines() {
        let mut record = QuoteRecord::single("Wolf: first");
        record.push_line("Lamb: second");
        assert_eq!(record.lines().len(), 2);
        assert_eq!(record.text(), "Wolf: first\nLamb: second");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#""Wolf: first\nLamb: second""#
        );
    }

    #[test]
    fn test_mapping_serializes_in_insertion_order() {
        let mut mapping = ResultMapping::new();
        mapping.insert(SubjectQuoteSet::new(
            &subject("Zed", "Zed"),
            vec![QuoteRecord::single("The unseen blade is the deadliest.")],
        ));
        mapping.insert(SubjectQuoteSet::new(&subject("Annie", "Annie"), vec![]));

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r#"{"Zed":{"quotes":["The unseen blade is the deadliest."],"icon":"https://cdn.example/Zed.png"},"Annie":{"quotes":[],"icon":"https://cdn.example/Annie.png"}}"#
        );
    }

    #[test]
    fn test_mapping_reinsert_keeps_position() {
        let mut mapping = ResultMapping::new();
        mapping.insert(SubjectQuoteSet::new(&subject("Ahri", "Ahri"), vec![]));
        mapping.insert(SubjectQuoteSet::new(&subject("Zed", "Zed"), vec![]));
        mapping.insert(SubjectQuoteSet::new(
            &subject("Ahri", "Ahri"),
            vec![QuoteRecord::single("Don't you trust me?")],
        ));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["Ahri", "Zed"]);
        assert_eq!(mapping.total_quotes(), 1);
        assert_eq!(mapping.get("Ahri").unwrap().quotes.len(), 1);
    }
}
