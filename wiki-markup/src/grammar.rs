//! Grammar selection and the full markup → quotes pipeline.

use tracing::debug;

use crate::dialogue::extract_dialogue;
use crate::expander::{expand, residual_macros};
use crate::single::extract_single_speaker;
use quote_core::QuoteRecord;

/// Subjects whose audio page is written as nested two-voice dialogue.
pub const DIALOGUE_SUBJECTS: &[&str] = &["Kindred"];

/// Extraction grammar applied to a subject's normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// One record per `''"..."''` audio line.
    Standard,
    /// Speaker-labelled turns grouped by list nesting.
    NestedDialogue,
}

impl Grammar {
    /// Resolves the grammar for a subject by display name.
    pub fn for_subject(name: &str) -> Self {
        if DIALOGUE_SUBJECTS.contains(&name) {
            Grammar::NestedDialogue
        } else {
            Grammar::Standard
        }
    }

    /// Runs this grammar over already-expanded text.
    pub fn extract(self, normalized: &str) -> Vec<QuoteRecord> {
        match self {
            Grammar::Standard => extract_single_speaker(normalized),
            Grammar::NestedDialogue => extract_dialogue(normalized),
        }
    }
}

/// Expands `raw` markup and extracts its quotes with `grammar`.
pub fn extract_quotes(raw: &str, grammar: Grammar) -> Vec<QuoteRecord> {
    let normalized = expand(raw);

    let residual = residual_macros(&normalized);
    if !residual.is_empty() {
        debug!(count = residual.len(), macros = ?residual, "Unexpanded macros left in text");
    }

    grammar.extract(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        assert_eq!(Grammar::for_subject("Kindred"), Grammar::NestedDialogue);
        assert_eq!(Grammar::for_subject("Ahri"), Grammar::Standard);
        assert_eq!(Grammar::for_subject("kindred"), Grammar::Standard);
    }

    #[test]
    fn test_extract_quotes_single_speaker() {
        let raw = "{{sbc|ping}} ''\"hello\"'' ''\"GG!\"''";
        let quotes = extract_quotes(raw, Grammar::Standard);
        assert_eq!(quotes, vec![QuoteRecord::single("hello")]);
    }

    #[test]
    fn test_extract_quotes_dialogue() {
        let raw = "* {{ci|Kindred|Wolf}}: ''\"first\"''\n** Lamb: ''\"second\"''";
        let quotes = extract_quotes(raw, Grammar::NestedDialogue);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text(), "Wolf: first\nLamb: second");
    }
}
