//! Scraping error types.

use std::fmt;

use crate::domain::StationId;

/// The page shapes the extraction engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The station overview page listing every stop.
    StationIndex,
    /// A single station's detail page.
    StationDetail,
    /// A line's route page.
    LineRoute,
    /// A live departure board.
    Departures,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::StationIndex => "station index",
            PageKind::StationDetail => "station detail",
            PageKind::LineRoute => "line route",
            PageKind::Departures => "departures",
        };
        f.write_str(name)
    }
}

/// Errors from fetching and extracting a page.
///
/// Anchor-level mismatches are not errors: the URL matcher returns
/// `Option` and unrelated links are skipped during the scan. Only
/// page-level structural absence surfaces as [`ScrapeError::Extraction`].
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status.
    #[error("upstream returned status {status} for {path}")]
    UpstreamStatus { status: u16, path: String },

    /// A required page-level container was missing or malformed.
    #[error("{page} extraction failed: {reason}")]
    Extraction { page: PageKind, reason: String },

    /// Station id not present in the station index.
    #[error("unknown station id {0}")]
    UnknownStation(StationId),

    /// Record serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Construct an extraction failure for the given page kind.
    pub fn extraction(page: PageKind, reason: impl Into<String>) -> Self {
        ScrapeError::Extraction {
            page,
            reason: reason.into(),
        }
    }
}
