//! Fetch-and-extract orchestration.
//!
//! Composes the pipeline for each page kind: render the request path
//! from its URL template, fetch the page, parse the markup, run the
//! matching extractor and serialize the record. The three station/line
//! resources go through the response cache keyed by the externally
//! visible request path; departure boards always bypass it.

use std::sync::Arc;

use scraper::Html;
use serde_json::Value;

use crate::cache::{CacheConfig, ResponseCache};
use crate::domain::{DepartureEntry, LineId, StationId};
use crate::kvb::KvbClient;
use crate::scrape::{
    ScrapeError, UrlPatterns, extract_departures, extract_line_route, extract_station_detail,
};
use crate::stations::StationIndex;

/// The orchestrator behind the serving layer.
pub struct TransitService {
    client: KvbClient,
    patterns: Arc<UrlPatterns>,
    cache: ResponseCache,
    stations: StationIndex,
}

impl TransitService {
    /// Create a new service.
    pub fn new(
        client: KvbClient,
        patterns: Arc<UrlPatterns>,
        stations: StationIndex,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            client,
            patterns,
            cache: ResponseCache::new(cache_config),
            stations,
        }
    }

    /// The serialized station index, cached.
    ///
    /// Serves the in-memory index built at startup; the overview page is
    /// not refetched per request.
    pub async fn stations_json(&self) -> Result<Arc<Value>, Arc<ScrapeError>> {
        self.cache
            .get_or_compute(stations_key(), async {
                let snapshot = self.stations.snapshot().await;
                Ok(Arc::new(serde_json::to_value(&snapshot)?))
            })
            .await
    }

    /// Details for one station, cached.
    pub async fn station_detail_json(&self, id: StationId) -> Result<Arc<Value>, Arc<ScrapeError>> {
        self.cache
            .get_or_compute(station_detail_key(id), async move {
                let name = self
                    .stations
                    .get(id)
                    .await
                    .ok_or(ScrapeError::UnknownStation(id))?;

                let path = self.patterns.station_details.render(&[id.get()]);
                let body = self.client.fetch_page(&path).await?;

                let detail = {
                    let doc = Html::parse_document(&body);
                    extract_station_detail(&doc, &self.patterns, id, name)?
                };
                Ok(Arc::new(serde_json::to_value(&detail)?))
            })
            .await
    }

    /// A line's route as seen from one station, cached.
    pub async fn line_route_json(
        &self,
        station_id: StationId,
        line_id: LineId,
    ) -> Result<Arc<Value>, Arc<ScrapeError>> {
        self.cache
            .get_or_compute(line_route_key(station_id, line_id), async move {
                let path = self
                    .patterns
                    .line_details
                    .render(&[station_id.get(), line_id.get()]);
                let body = self.client.fetch_page(&path).await?;

                let route = {
                    let doc = Html::parse_document(&body);
                    extract_line_route(&doc, &self.patterns, station_id, line_id)?
                };
                Ok(Arc::new(serde_json::to_value(&route)?))
            })
            .await
    }

    /// The live departure board for a station. Never cached.
    pub async fn departures(&self, id: StationId) -> Result<Vec<DepartureEntry>, ScrapeError> {
        let path = self.patterns.departures.render(&[id.get()]);
        let body = self.client.fetch_page(&path).await?;

        let doc = Html::parse_document(&body);
        extract_departures(&doc)
    }

    /// The station index (for startup reporting and refresh).
    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    /// Number of live cache entries (for monitoring).
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

// Cache keys mirror the externally visible resource paths, one entry per
// distinct query.

fn stations_key() -> String {
    "/stations/".to_string()
}

fn station_detail_key(id: StationId) -> String {
    format!("/stations/{id}/")
}

fn line_route_key(station_id: StationId, line_id: LineId) -> String {
    format!("/stations/{station_id}/lines/{line_id}/")
}
