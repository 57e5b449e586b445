//! Process-wide station index.
//!
//! The id → name mapping is scraped from the overview page before the
//! server starts accepting requests, then read concurrently by the
//! extractors. A re-scrape replaces the whole mapping atomically.

mod index;

pub use index::StationIndex;
