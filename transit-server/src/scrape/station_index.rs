//! Station index extraction from the overview page.

use std::collections::BTreeMap;

use scraper::Html;

use crate::domain::StationId;

use super::pattern::UrlPatterns;
use super::selector;

/// Extract the id → display-name mapping from the station overview page.
///
/// Scans every anchor on the page and keeps those whose href matches the
/// station detail template; everything else is a navigation link and is
/// skipped. A station id listed twice keeps the last anchor text seen.
/// The `BTreeMap` exposes the result in ascending id order.
pub fn extract_station_index(doc: &Html, patterns: &UrlPatterns) -> BTreeMap<StationId, String> {
    let anchor = selector("a");

    let mut index = BTreeMap::new();
    for a in doc.select(&anchor) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(m) = patterns.station_details.matches(href) else {
            continue;
        };
        let Some(id) = m.int("station_id") else {
            continue;
        };
        let name: String = a.text().collect();
        index.insert(StationId::new(id), name);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn overview_anchors_become_index_entries() {
        let doc = parse(
            r#"<html><body>
            <a href="/german/hst/overview/100/">Central</a>
            <a href="/other/">X</a>
            </body></html>"#,
        );
        let index = extract_station_index(&doc, &UrlPatterns::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&StationId::new(100)), Some(&"Central".to_string()));
    }

    #[test]
    fn unrelated_and_hrefless_anchors_are_skipped() {
        let doc = parse(
            r#"<html><body>
            <a>no href</a>
            <a href="/german/hst/overview/">no id</a>
            <a href="/german/hst/overview/abc/">bad id</a>
            <a href="/german/hst/overview/7/extra/">trailing</a>
            <a href="/german/hst/overview/7/">Neumarkt</a>
            </body></html>"#,
        );
        let index = extract_station_index(&doc, &UrlPatterns::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&StationId::new(7)), Some(&"Neumarkt".to_string()));
    }

    #[test]
    fn duplicate_id_keeps_last_seen_name() {
        let doc = parse(
            r#"<html><body>
            <a href="/german/hst/overview/5/">Old Name</a>
            <a href="/german/hst/overview/5/">New Name</a>
            </body></html>"#,
        );
        let index = extract_station_index(&doc, &UrlPatterns::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&StationId::new(5)), Some(&"New Name".to_string()));
    }

    #[test]
    fn index_is_sorted_by_station_id() {
        let doc = parse(
            r#"<html><body>
            <a href="/german/hst/overview/300/">C</a>
            <a href="/german/hst/overview/100/">A</a>
            <a href="/german/hst/overview/200/">B</a>
            </body></html>"#,
        );
        let index = extract_station_index(&doc, &UrlPatterns::default());

        let ids: Vec<u32> = index.keys().map(|id| id.get()).collect();
        assert_eq!(ids, vec![100, 200, 300]);
    }

    #[test]
    fn rerun_on_same_page_is_idempotent() {
        let html = r#"<html><body>
            <a href="/german/hst/overview/1/">Dom</a>
            <a href="/german/hst/overview/2/">Rudolfplatz</a>
            </body></html>"#;
        let patterns = UrlPatterns::default();

        let first = extract_station_index(&parse(html), &patterns);
        let second = extract_station_index(&parse(html), &patterns);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_page_yields_empty_index() {
        let doc = parse("<html><body><p>maintenance</p></body></html>");
        let index = extract_station_index(&doc, &UrlPatterns::default());
        assert!(index.is_empty());
    }
}
