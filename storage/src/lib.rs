//! Storage crate: champion roster input and quote export persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`roster`] – Roster / RosterEntry (the `name_id_dict.json` file)
//! - [`quote_store`] – QuoteSink trait and JsonQuoteStore
//! - [`json_file`] – atomic JSON file writes

mod error;
mod json_file;
mod quote_store;
mod roster;


pub use error::StorageError;
pub use json_file::write_json_atomic;
pub use quote_store::{JsonQuoteStore, QuoteSink};
pub use roster::{Roster, RosterEntry};
