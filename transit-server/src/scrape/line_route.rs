//! Line route extraction.

use scraper::Html;

use crate::domain::{LineId, LineRoute, StationId};

use super::error::{PageKind, ScrapeError};
use super::pattern::UrlPatterns;
use super::selector;

/// Class-token suffix shared by every route cell on a line page.
const ROUTE_CELL_SUFFIX: &str = "station";

/// First class token of the cell marking the turnaround terminal.
const TURNAROUND_CLASS: &str = "btstation";

/// Extract a line's route from its detail page.
///
/// Route cells are the `td` elements with a class token ending in
/// "station" (class lists supported, not exact match). A single
/// left-to-right scan accumulates station ids into the forward sequence
/// until the turnaround cell is seen, then into the reverse sequence.
/// The switch is a one-way latch: a recurring marker does not flip back.
/// Cells without a matching anchor are skipped; a page with no route
/// cells at all is a fatal extraction failure.
pub fn extract_line_route(
    doc: &Html,
    patterns: &UrlPatterns,
    station_id: StationId,
    line_id: LineId,
) -> Result<LineRoute, ScrapeError> {
    let cell = selector("td");
    let anchor = selector("a");

    let mut forward = Vec::new();
    let mut reverse = Vec::new();
    let mut in_reverse = false;
    let mut saw_route_cell = false;

    for td in doc.select(&cell) {
        // Read the class attribute directly: token order matters for the
        // turnaround marker and `classes()` does not preserve it.
        let class_attr = td.value().attr("class").unwrap_or("");
        if !class_attr
            .split_whitespace()
            .any(|c| c.ends_with(ROUTE_CELL_SUFFIX))
        {
            continue;
        }
        saw_route_cell = true;

        let Some(a) = td.select(&anchor).next() else {
            continue;
        };
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(m) = patterns.station_details.matches(href) else {
            continue;
        };
        let Some(id) = m.int("station_id") else {
            continue;
        };

        if in_reverse {
            reverse.push(StationId::new(id));
        } else {
            forward.push(StationId::new(id));
        }

        // The turnaround cell itself still belongs to the forward leg;
        // only subsequent cells accumulate into reverse.
        if class_attr.split_whitespace().next() == Some(TURNAROUND_CLASS) {
            in_reverse = true;
        }
    }

    if !saw_route_cell {
        return Err(ScrapeError::extraction(
            PageKind::LineRoute,
            "no route cells on line page",
        ));
    }

    Ok(LineRoute {
        station_id,
        line_id,
        stations_forward: forward,
        stations_reverse: reverse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Result<LineRoute, ScrapeError> {
        let doc = Html::parse_document(html);
        extract_line_route(
            &doc,
            &UrlPatterns::default(),
            StationId::new(100),
            LineId::new(18),
        )
    }

    fn cell(class: &str, id: u32) -> String {
        format!(r#"<td class="{class}"><a href="/german/hst/overview/{id}/">S{id}</a></td>"#)
    }

    #[test]
    fn turnaround_splits_forward_and_reverse() {
        let html = format!(
            "<html><body><table><tr>{}{}{}{}{}</tr></table></body></html>",
            cell("station", 1),
            cell("station", 2),
            cell("btstation", 3),
            cell("station", 4),
            cell("station", 5),
        );
        let route = extract(&html).unwrap();

        assert_eq!(
            route.stations_forward,
            vec![StationId::new(1), StationId::new(2), StationId::new(3)]
        );
        assert_eq!(
            route.stations_reverse,
            vec![StationId::new(4), StationId::new(5)]
        );
    }

    #[test]
    fn concatenation_preserves_document_order() {
        let html = format!(
            "<html><body><table><tr>{}{}{}{}</tr></table></body></html>",
            cell("station", 9),
            cell("btstation", 3),
            cell("station", 7),
            cell("station", 1),
        );
        let route = extract(&html).unwrap();

        let concatenated: Vec<u32> = route
            .stations_forward
            .iter()
            .chain(route.stations_reverse.iter())
            .map(|id| id.get())
            .collect();
        assert_eq!(concatenated, vec![9, 3, 7, 1]);
    }

    #[test]
    fn latch_never_resets_on_second_marker() {
        let html = format!(
            "<html><body><table><tr>{}{}{}{}{}</tr></table></body></html>",
            cell("station", 1),
            cell("btstation", 2),
            cell("station", 3),
            cell("btstation", 4),
            cell("station", 5),
        );
        let route = extract(&html).unwrap();

        assert_eq!(route.stations_forward, vec![StationId::new(1), StationId::new(2)]);
        assert_eq!(
            route.stations_reverse,
            vec![StationId::new(3), StationId::new(4), StationId::new(5)]
        );
    }

    #[test]
    fn class_lists_match_on_suffix_token() {
        let html = format!(
            "<html><body><table><tr>{}{}</tr></table></body></html>",
            cell("highlight endstation", 1),
            cell("plain", 2),
        );
        let route = extract(&html).unwrap();

        assert_eq!(route.stations_forward, vec![StationId::new(1)]);
        assert!(route.stations_reverse.is_empty());
    }

    #[test]
    fn turnaround_requires_marker_as_first_token() {
        // "btstation" as a later class token does not flip the latch.
        let html = format!(
            "<html><body><table><tr>{}{}</tr></table></body></html>",
            cell("station btstation", 1),
            cell("station", 2),
        );
        let route = extract(&html).unwrap();

        assert_eq!(route.stations_forward, vec![StationId::new(1), StationId::new(2)]);
        assert!(route.stations_reverse.is_empty());
    }

    #[test]
    fn cells_without_anchor_are_skipped() {
        let html = format!(
            r#"<html><body><table><tr>
            <td class="station">no link</td>
            {}
            <td class="station"><a>no href</a></td>
            </tr></table></body></html>"#,
            cell("station", 2),
        );
        let route = extract(&html).unwrap();

        assert_eq!(route.stations_forward, vec![StationId::new(2)]);
    }

    #[test]
    fn page_without_route_cells_is_fatal() {
        let err = extract(
            r#"<html><body><table><tr><td class="other">x</td></tr></table></body></html>"#,
        )
        .unwrap_err();
        match err {
            ScrapeError::Extraction { page, .. } => assert_eq!(page, PageKind::LineRoute),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
