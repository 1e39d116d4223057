//! Extraction orchestrator: fetch → expand → grammar → [`ResultMapping`] → one export write.
//!
//! Subjects are processed sequentially. A failed fetch is logged and recorded as an empty quote
//! list; an empty extraction is a warning. The mapping is only handed to the sink once every
//! subject has been processed.

use quote_core::{RawPage, Result, ResultMapping, Subject, SubjectQuoteSet};
use storage::QuoteSink;
use tracing::{error, info, instrument, warn};
use wiki_markup::{extract_quotes, Grammar};

use crate::fetch::WikiSource;

/// Outcome counts of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub subjects: usize,
    pub quotes: usize,
    /// Subjects fetched successfully but with no quotes.
    pub empty: Vec<String>,
    /// Subjects whose page could not be fetched.
    pub failed: Vec<String>,
}

/// Runs the grammar selected for `subject` over its fetched page.
pub fn extract_subject(subject: &Subject, page: &RawPage) -> SubjectQuoteSet {
    let grammar = Grammar::for_subject(&subject.name);
    SubjectQuoteSet::new(subject, extract_quotes(&page.text, grammar))
}

/// Fetches and extracts every subject in order. Never fails: per-subject errors are logged and recorded.
pub async fn collect_quotes(
    subjects: &[Subject],
    source: &dyn WikiSource,
) -> (ResultMapping, ExtractionSummary) {
    let mut mapping = ResultMapping::new();
    let mut summary = ExtractionSummary::default();
    let total = subjects.len();

    for (idx, subject) in subjects.iter().enumerate() {
        info!("{} ({}/{})", subject.name, idx + 1, total);

        let identifier = subject.fetch_identifier();
        let url = source.locator(&identifier);

        let set = match source.fetch(&identifier).await {
            Ok(text) => {
                let set = extract_subject(subject, &RawPage::new(subject, text));
                if set.is_empty() {
                    warn!(subject = %subject.name, url = %url, "No quotes found");
                    summary.empty.push(subject.name.clone());
                }
                set
            }
            Err(e) => {
                error!(subject = %subject.name, url = %url, error = %e, "Failed to fetch audio page");
                summary.failed.push(subject.name.clone());
                SubjectQuoteSet::new(subject, Vec::new())
            }
        };

        summary.quotes += set.quotes.len();
        mapping.insert(set);
    }

    summary.subjects = mapping.len();
    (mapping, summary)
}

/// Full run: collect every subject, then write the finished mapping to `sink` in one call.
#[instrument(skip_all, fields(subjects = subjects.len()))]
pub async fn run_extraction(
    subjects: &[Subject],
    source: &dyn WikiSource,
    sink: &dyn QuoteSink,
) -> Result<ExtractionSummary> {
    let (mapping, summary) = collect_quotes(subjects, source).await;
    sink.save(&mapping)?;

    info!(
        subjects = summary.subjects,
        quotes = summary.quotes,
        empty = summary.empty.len(),
        failed = summary.failed.len(),
        "Extraction completed"
    );
    Ok(summary)
}
