//! Domain types for the KVB scraping service.

mod ids;
mod records;

pub use ids::{LineId, StationId};
pub use records::{DepartureEntry, LineRef, LineRoute, StationDetail};
