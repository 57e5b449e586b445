//! KVB transit scraping server.
//!
//! Scrapes the Kölner Verkehrs-Betriebe public website (station lists,
//! station detail pages, line-route pages, live departure boards) and
//! serves the extracted records as a small read-only JSON API.

pub mod cache;
pub mod domain;
pub mod kvb;
pub mod scrape;
pub mod service;
pub mod stations;
pub mod web;
