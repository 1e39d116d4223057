//! # wiki-markup
//!
//! Turns raw champion audio-page markup into [`QuoteRecord`]s.
//!
//! ## Modules
//!
//! - [`invocation`] – [`MacroInvocation`]: a parsed `{{name|...}}` or `[[target|label]]`
//! - [`expander`] – fixed, ordered rewrite passes producing plain display text
//! - [`single`] – single-speaker grammar (`''"..."''` audio lines)
//! - [`dialogue`] – nested dual-speaker grammar (list depth groups exchanges)
//! - [`grammar`] – [`Grammar`] selection per subject and the full pipeline
//!
//! Every function here is pure and total: malformed markup is passed through, never rejected.

pub mod dialogue;
pub mod expander;
pub mod grammar;
pub mod invocation;
pub mod single;
mod text;

pub use dialogue::{extract_dialogue, SPEAKER_LABELS};
pub use expander::{expand, residual_macros};
pub use grammar::{extract_quotes, Grammar, DIALOGUE_SUBJECTS};
pub use invocation::MacroInvocation;
pub use single::extract_single_speaker;
pub use text::{AUDIO_MARKER, BOLD_MARKER, RESOURCE_TOKEN, SENTINEL_FILLER};

pub use quote_core::QuoteRecord;
