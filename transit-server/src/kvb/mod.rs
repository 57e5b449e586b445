//! KVB website HTTP client.
//!
//! The Kölner Verkehrs-Betriebe site has no API; the client fetches its
//! public HTML pages for the extraction engine to pick apart.

mod client;

pub use client::{KvbClient, KvbConfig};
