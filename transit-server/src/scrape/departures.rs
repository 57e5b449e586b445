//! Departure board extraction.

use scraper::Html;

use crate::domain::{DepartureEntry, LineRef};

use super::error::{PageKind, ScrapeError};
use super::selector;

/// The board's token for a departure that is due now.
const DUE_NOW: &str = "sofort";

const NBSP: char = '\u{a0}';

/// Extract the live departure board.
///
/// The page carries two `table.qr_table` elements; the first is a
/// header/legend and is deliberately skipped, the board is the second.
/// Every row must have three cells (line, direction, wait time) in fixed
/// order; a shorter row fails the whole board, no partial result is
/// returned. Row order is preserved as shown on screen.
pub fn extract_departures(doc: &Html) -> Result<Vec<DepartureEntry>, ScrapeError> {
    let table_sel = selector("table.qr_table");
    let row_sel = selector("tr");
    let cell_sel = selector("td");

    let tables: Vec<_> = doc.select(&table_sel).collect();
    let board = tables.get(1).ok_or_else(|| {
        ScrapeError::extraction(PageKind::Departures, "departure board table missing")
    })?;

    let mut departures = Vec::new();
    for row in board.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() < 3 {
            return Err(ScrapeError::extraction(
                PageKind::Departures,
                format!("departure row has {} cells, expected 3", cells.len()),
            ));
        }

        let line_token: String = cells[0].text().collect::<String>().replace(NBSP, "");
        let direction: String = cells[1].text().collect::<String>().replace(NBSP, "");
        let wait_text = normalize_wait(&cells[2].text().collect::<String>());
        let wait_mins = wait_text.parse::<u32>().map_err(|_| {
            ScrapeError::extraction(
                PageKind::Departures,
                format!("unparseable wait time {wait_text:?}"),
            )
        })?;

        departures.push(DepartureEntry {
            line: LineRef::parse(&line_token),
            direction,
            wait_mins,
        });
    }

    Ok(departures)
}

/// Normalize a raw wait-time cell down to its minute count.
///
/// Non-breaking spaces become regular spaces, the text is trimmed and
/// lowercased, "sofort" collapses to "0" and a trailing " min" suffix is
/// dropped.
fn normalize_wait(raw: &str) -> String {
    let text = raw.replace(NBSP, " ").trim().to_lowercase();
    if text == DUE_NOW {
        return "0".to_string();
    }
    match text.strip_suffix(" min") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
