//! Structured records produced by the page extractors.
//!
//! Field names follow the wire format of the JSON API, so serialization
//! is a mechanical serde step and nothing more.

use serde::Serialize;

use super::{LineId, StationId};

/// A line reference as it appears on a departure board.
///
/// Line tokens are usually numeric ("18") but night buses and
/// replacement services show alphanumeric tokens like "SB40". The
/// distinction is explicit so consumers must handle both cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LineRef {
    /// A numeric line id.
    Numeric(LineId),
    /// A token that did not parse as an integer; kept verbatim.
    Opaque(String),
}

impl LineRef {
    /// Parse a raw line token, falling back to the verbatim text.
    pub fn parse(token: &str) -> Self {
        match token.parse::<u32>() {
            Ok(n) => LineRef::Numeric(LineId::new(n)),
            Err(_) => LineRef::Opaque(token.to_string()),
        }
    }
}

/// Details for a single station: its display name and the lines serving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDetail {
    pub station_id: StationId,

    /// Display name, looked up from the station index.
    pub name: String,

    /// Lines serving this station, deduplicated and sorted ascending.
    pub line_ids: Vec<LineId>,
}

/// The stations a line calls at, split by travel direction.
///
/// Both sequences are in route order as listed on the page, not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRoute {
    /// The station the query originated from.
    pub station_id: StationId,

    pub line_id: LineId,

    /// Stops up to and including the turnaround terminal.
    pub stations_forward: Vec<StationId>,

    /// Stops after the turnaround terminal.
    pub stations_reverse: Vec<StationId>,
}

/// One row of a live departure board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureEntry {
    #[serde(rename = "line_id")]
    pub line: LineRef,

    /// Destination text as shown on the board.
    pub direction: String,

    /// Minutes until departure; the board's "sofort" collapses to 0.
    #[serde(rename = "wait_time")]
    pub wait_mins: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_ref_parses_numeric_tokens() {
        assert_eq!(LineRef::parse("18"), LineRef::Numeric(LineId::new(18)));
        assert_eq!(LineRef::parse("SB40"), LineRef::Opaque("SB40".to_string()));
        assert_eq!(LineRef::parse(""), LineRef::Opaque(String::new()));
    }

    #[test]
    fn line_ref_serializes_untagged() {
        let numeric = serde_json::to_value(LineRef::Numeric(LineId::new(18))).unwrap();
        assert_eq!(numeric, json!(18));

        let opaque = serde_json::to_value(LineRef::Opaque("SB40".to_string())).unwrap();
        assert_eq!(opaque, json!("SB40"));
    }

    #[test]
    fn departure_entry_wire_format() {
        let entry = DepartureEntry {
            line: LineRef::Numeric(LineId::new(18)),
            direction: "Airport".to_string(),
            wait_mins: 5,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"line_id": 18, "direction": "Airport", "wait_time": 5})
        );
    }

    #[test]
    fn line_route_wire_format() {
        let route = LineRoute {
            station_id: StationId::new(100),
            line_id: LineId::new(18),
            stations_forward: vec![StationId::new(100), StationId::new(101)],
            stations_reverse: vec![StationId::new(101)],
        };
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            json!({
                "station_id": 100,
                "line_id": 18,
                "stations_forward": [100, 101],
                "stations_reverse": [101],
            })
        );
    }
}
