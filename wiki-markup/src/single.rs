//! Single-speaker grammar: every quoted audio line `''"text"''` becomes one record.
//!
//! Two shapes are matched: the inline audio form `{{sm2|file|''"text"''` and the bare
//! `''"text"''`. For each match the last non-empty capture wins. The closing delimiter is
//! accepted as `"''` or transposed `''"`; captures are non-greedy and never span lines. A
//! transposed closer directly followed by `'` is italics inside the quote, not a closer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{is_excluded, normalize_emphasis};
use quote_core::QuoteRecord;

static QUOTED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"\{\{sm2\|[^|{}\n]*\|''"(.*?)(?:"''|''"(?:[^']|$))"#,
        r#"|''"(.*?)(?:"''|''"(?:[^']|$))"#,
    ))
    .unwrap()
});

/// Extracts quoted audio lines in order of appearance, skipping audio-file references and the
/// sentinel filler.
pub fn extract_single_speaker(text: &str) -> Vec<QuoteRecord> {
    QUOTED_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            (1..caps.len())
                .rev()
                .filter_map(|i| caps.get(i))
                .map(|m| m.as_str())
                .find(|s| !s.is_empty())
        })
        .filter(|quote| !is_excluded(quote))
        .map(|quote| QuoteRecord::single(normalize_emphasis(quote)))
        .collect()
}
