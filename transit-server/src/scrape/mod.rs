//! HTML extraction engine.
//!
//! The KVB website is template-driven: each page kind has a fixed shape,
//! so extraction is a matter of walking a parsed tree and matching hrefs
//! against a small set of path templates. Anchor-level mismatches are
//! skipped silently (they are navigation links); a missing page-level
//! container aborts the extraction with [`ScrapeError::Extraction`].

mod departures;
mod error;
mod line_route;
mod pattern;
mod station_detail;
mod station_index;

pub use departures::extract_departures;
pub use error::{PageKind, ScrapeError};
pub use line_route::extract_line_route;
pub use pattern::{PathMatch, PathTemplate, UrlPatterns};
pub use station_detail::extract_station_detail;
pub use station_index::extract_station_index;

use scraper::Selector;

/// Parse a static selector string.
///
/// Only called with literal selectors known to be valid, so the parse
/// cannot fail at runtime.
pub(crate) fn selector(s: &str) -> Selector {
    Selector::parse(s).expect("static selector string")
}
