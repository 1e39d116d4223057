//! Scraper configuration: endpoints, file paths, logging, HTTP timeout. Loaded from env.

mod base;


pub use base::ScraperConfig;
