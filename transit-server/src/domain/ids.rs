//! Identifier types.
//!
//! Station and line ids are assigned by the transit operator and embedded
//! in the website's URLs. They are never generated locally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operator-assigned station identifier.
///
/// Appears as the integer path segment of `/german/hst/overview/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw station id.
    pub fn new(id: u32) -> Self {
        StationId(id)
    }

    /// The raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator-assigned line identifier.
///
/// Line ids on station detail pages are always numeric; departure boards
/// occasionally show alphanumeric line tokens, which are kept as
/// [`super::LineRef::Opaque`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u32);

impl LineId {
    /// Wrap a raw line id.
    pub fn new(id: u32) -> Self {
        LineId(id)
    }

    /// The raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
