//! Data transfer objects for web responses.

use chrono::Utc;
use serde::Serialize;

/// The discovery document served at the root.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    /// Current UTC timestamp.
    pub datetime: String,

    /// Available resources.
    pub methods: MethodMap,
}

/// Resource paths listed in the discovery document.
#[derive(Debug, Serialize)]
pub struct MethodMap {
    pub station_list: &'static str,
    pub station_details: &'static str,
    pub departures: &'static str,
    pub line_details: &'static str,
}

impl IndexResponse {
    /// Build the discovery document for the current moment.
    pub fn current() -> Self {
        Self {
            datetime: Utc::now().to_rfc3339(),
            methods: MethodMap {
                station_list: "/stations/",
                station_details: "/stations/{station_id}/",
                departures: "/stations/{station_id}/departures/",
                line_details: "/stations/{station_id}/lines/{line_id}/",
            },
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
