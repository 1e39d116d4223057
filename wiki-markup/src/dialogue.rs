//! Nested dual-speaker grammar, for subjects whose lines alternate between two voices.
//!
//! Lines are scanned top to bottom. A line is a dialogue turn when it reads
//! `<label>: <content>` with one of [`SPEAKER_LABELS`]; the `''"` / `"''` quote marks around the
//! content are optional. A turn nested exactly one list level deeper than the previous turn
//! continues that exchange; any other turn starts a new record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{is_excluded, normalize_emphasis};
use quote_core::QuoteRecord;

/// Speaker labels recognized on the dual-persona audio page.
pub const SPEAKER_LABELS: [&str; 3] = ["Lamb", "Wolf", "Kindred"];

static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        concat!(
            r#"^\**\s*(?:'''({0})\s*:\s*'''|'''({0})'''\s*:|({0})\s*:)"#,
            r#"\s*(?:''"|")?(.*?)(?:"''|''"|")?\s*$"#,
        ),
        SPEAKER_LABELS.join("|")
    ))
    .unwrap()
});

/// Count of leading `*` list markers.
fn nesting_depth(line: &str) -> usize {
    line.chars().take_while(|&c| c == '*').count()
}

/// Speaker label and raw content of a turn line. A bold label may close before or after the
/// colon: `'''Wolf''':` or `'''Wolf:'''`.
fn match_turn(line: &str) -> Option<(&str, &str)> {
    let caps = SPEAKER_LINE.captures(line)?;
    let label = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
    let content = caps.get(4).map_or("", |m| m.as_str()).trim();
    Some((label.as_str(), content))
}

/// Groups speaker-labelled turns into exchanges, one [`QuoteRecord`] per exchange.
///
/// Excluded turns (audio references, filler) still count for nesting: a reply nested under a
/// dropped turn opens a new record instead of joining an earlier exchange.
pub fn extract_dialogue(text: &str) -> Vec<QuoteRecord> {
    let mut records: Vec<QuoteRecord> = Vec::new();
    let mut previous_depth = 1;
    // Whether the last record is the exchange the previous turn belongs to.
    let mut exchange_open = false;

    for line in text.lines().map(str::trim) {
        let Some((label, content)) = match_turn(line) else {
            continue;
        };
        let depth = nesting_depth(line);
        let continues = depth == previous_depth + 1;
        previous_depth = depth;

        if is_excluded(content) {
            exchange_open &= continues;
            continue;
        }

        let turn = normalize_emphasis(&format!("{}: {}", label, content));
        match records.last_mut() {
            Some(exchange) if continues && exchange_open => exchange.push_line(turn),
            _ => records.push(QuoteRecord::single(turn)),
        }
        exchange_open = true;
    }

    records
}
