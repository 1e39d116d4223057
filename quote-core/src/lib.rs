//! # quote-core
//!
//! Core types for the quote scraper: [`Subject`], [`RawPage`], [`QuoteRecord`], [`SubjectQuoteSet`],
//! [`ResultMapping`], the [`QuoteError`] type, and tracing initialization. No I/O beyond the log file.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{QuoteError, Result};
pub use logger::init_tracing;
pub use types::{QuoteRecord, RawPage, ResultMapping, Subject, SubjectQuoteSet};
