//! URL path templates.
//!
//! The website encodes station and line ids in its URL paths. A
//! [`PathTemplate`] is an ordered sequence of literal segments and typed
//! placeholders, e.g. `/german/hst/overview/{station_id:d}/`. Matching is
//! purely structural: segment count, literal equality and placeholder
//! coercion. An unrelated path gives `None`, never an error.

use std::collections::HashMap;

/// One segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Fixed text, compared byte-for-byte (may be empty around slashes).
    Literal(String),
    /// Integer placeholder; the segment must be all ASCII digits.
    Int(String),
    /// Free-text placeholder; the segment must be non-empty.
    Text(String),
}

/// An extracted placeholder value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MatchValue {
    Int(u32),
    Text(String),
}

/// A successful template match, exposing placeholder values by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    values: HashMap<String, MatchValue>,
}

impl PathMatch {
    /// An integer placeholder value, if one was captured under `name`.
    pub fn int(&self, name: &str) -> Option<u32> {
        match self.values.get(name) {
            Some(MatchValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// A text placeholder value, if one was captured under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(MatchValue::Text(v)) => Some(v),
            _ => None,
        }
    }
}

/// A parsed path template.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template string.
    ///
    /// `{name:d}` is an integer placeholder, `{name}` a text placeholder;
    /// everything else is literal. Any string parses; there is no invalid
    /// template syntax, only literals that never match.
    pub fn parse(template: &str) -> Self {
        let segments = template
            .split('/')
            .map(|seg| {
                match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(inner) => match inner.strip_suffix(":d") {
                        Some(name) => Segment::Int(name.to_string()),
                        None => Segment::Text(inner.to_string()),
                    },
                    None => Segment::Literal(seg.to_string()),
                }
            })
            .collect();
        Self { segments }
    }

    /// Match a candidate path against this template.
    ///
    /// The path must have exactly the template's segment count; extra
    /// trailing content is a non-match. Integer placeholders only accept
    /// all-digit segments.
    pub fn matches(&self, path: &str) -> Option<PathMatch> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut values = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Int(name) => {
                    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    let value = part.parse::<u32>().ok()?;
                    values.insert(name.clone(), MatchValue::Int(value));
                }
                Segment::Text(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    values.insert(name.clone(), MatchValue::Text(part.to_string()));
                }
            }
        }

        Some(PathMatch { values })
    }

    /// Build a concrete path by filling the placeholders in order.
    ///
    /// `values` must supply one integer per placeholder.
    pub fn render(&self, values: &[u32]) -> String {
        let mut remaining = values.iter();
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(lit) => lit.clone(),
                Segment::Int(_) | Segment::Text(_) => remaining
                    .next()
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            })
            .collect();
        parts.join("/")
    }
}

/// The five fixed path templates the website uses.
#[derive(Debug, Clone)]
pub struct UrlPatterns {
    /// Station overview / detail page.
    pub station_details: PathTemplate,
    /// Line route page, relative to a station.
    pub line_details: PathTemplate,
    /// Printable schedule notice.
    pub schedule_table: PathTemplate,
    /// Pocket schedule.
    pub schedule_pocket: PathTemplate,
    /// Live departure board.
    pub departures: PathTemplate,
}

impl Default for UrlPatterns {
    fn default() -> Self {
        Self {
            station_details: PathTemplate::parse("/german/hst/overview/{station_id:d}/"),
            line_details: PathTemplate::parse("/german/hst/showline/{station_id:d}/{line_id:d}/"),
            schedule_table: PathTemplate::parse("/german/hst/aushang/{station_id:d}/"),
            schedule_pocket: PathTemplate::parse("/german/hst/miniplan/{station_id:d}/"),
            departures: PathTemplate::parse("/qr/{station_id:d}/"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any id rendered into a template is extracted back exactly.
        #[test]
        fn render_then_match_roundtrips(station_id: u32, line_id: u32) {
            let patterns = UrlPatterns::default();

            let path = patterns.station_details.render(&[station_id]);
            let m = patterns.station_details.matches(&path).unwrap();
            prop_assert_eq!(m.int("station_id"), Some(station_id));

            let path = patterns.line_details.render(&[station_id, line_id]);
            let m = patterns.line_details.matches(&path).unwrap();
            prop_assert_eq!(m.int("station_id"), Some(station_id));
            prop_assert_eq!(m.int("line_id"), Some(line_id));
        }

        /// Arbitrary candidate strings never panic the matcher.
        #[test]
        fn arbitrary_paths_never_panic(path in ".*") {
            let patterns = UrlPatterns::default();
            let _ = patterns.station_details.matches(&path);
            let _ = patterns.line_details.matches(&path);
            let _ = patterns.schedule_table.matches(&path);
            let _ = patterns.schedule_pocket.matches(&path);
            let _ = patterns.departures.matches(&path);
        }
    }
}
