//! Shared constants and line-level helpers for both grammars.

/// Bold marker emitted in place of wiki triple emphasis.
pub const BOLD_MARKER: &str = "**";

/// Wiki triple emphasis (bold).
pub(crate) const TRIPLE_EMPHASIS: &str = "'''";

/// Captured text containing this is an audio-file reference, not a quote.
pub const AUDIO_MARKER: &str = ".ogg";

/// Placeholder line on audio pages that is not a quote.
pub const SENTINEL_FILLER: &str = "GG!";

/// Literal substituted for `{{RP...}}` resource macros.
pub const RESOURCE_TOKEN: &str = "RP";

/// True when `text` must never become a quote record.
pub(crate) fn is_excluded(text: &str) -> bool {
    text.is_empty() || text.contains(AUDIO_MARKER) || text == SENTINEL_FILLER
}

pub(crate) fn normalize_emphasis(text: &str) -> String {
    text.replace(TRIPLE_EMPHASIS, BOLD_MARKER)
}
