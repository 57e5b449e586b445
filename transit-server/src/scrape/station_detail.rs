//! Station detail extraction.

use std::collections::BTreeSet;

use scraper::Html;

use crate::domain::{LineId, StationDetail, StationId};

use super::error::{PageKind, ScrapeError};
use super::pattern::UrlPatterns;
use super::selector;

/// Extract the lines serving a station from its detail page.
///
/// Only anchors inside the page's free-text container (`div.fliesstext`)
/// are considered; a missing container is a fatal extraction failure.
/// Line ids are deduplicated and exposed in ascending order. The display
/// `name` comes from the previously built station index, not from this
/// page.
pub fn extract_station_detail(
    doc: &Html,
    patterns: &UrlPatterns,
    station_id: StationId,
    name: String,
) -> Result<StationDetail, ScrapeError> {
    let container_sel = selector("div.fliesstext");
    let anchor = selector("a");

    let container = doc.select(&container_sel).next().ok_or_else(|| {
        ScrapeError::extraction(
            PageKind::StationDetail,
            "free-text container div.fliesstext missing",
        )
    })?;

    let mut line_ids = BTreeSet::new();
    for a in container.select(&anchor) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(m) = patterns.line_details.matches(href) else {
            continue;
        };
        let Some(line_id) = m.int("line_id") else {
            continue;
        };
        line_ids.insert(LineId::new(line_id));
    }

    Ok(StationDetail {
        station_id,
        name,
        line_ids: line_ids.into_iter().collect(),
    })
}
