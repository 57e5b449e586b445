//! Station index lifecycle.

use std::collections::BTreeMap;
use std::sync::Arc;

use scraper::Html;
use tokio::sync::RwLock;

use crate::domain::StationId;
use crate::kvb::KvbClient;
use crate::scrape::{PageKind, ScrapeError, UrlPatterns, extract_station_index};

/// Path of the overview page listing every station.
const OVERVIEW_PATH: &str = "/german/hst/overview/";

/// Thread-safe station id → display name lookup.
///
/// Built once before serving starts; afterwards readers never race a
/// writer because [`StationIndex::refresh`] swaps in a complete new
/// mapping under the write lock.
#[derive(Clone)]
pub struct StationIndex {
    inner: Arc<RwLock<BTreeMap<StationId, String>>>,
    client: KvbClient,
    patterns: Arc<UrlPatterns>,
}

impl StationIndex {
    /// Build the index by scraping the overview page.
    ///
    /// Fails if the page cannot be fetched or lists no stations, so the
    /// server can refuse to start with an unusable index.
    pub async fn fetch(client: KvbClient, patterns: Arc<UrlPatterns>) -> Result<Self, ScrapeError> {
        let map = scrape_overview(&client, &patterns).await?;
        Ok(Self {
            inner: Arc::new(RwLock::new(map)),
            client,
            patterns,
        })
    }

    /// Create an index from a pre-built mapping (for tests).
    pub fn preloaded(
        map: BTreeMap<StationId, String>,
        client: KvbClient,
        patterns: Arc<UrlPatterns>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
            client,
            patterns,
        }
    }

    /// Look up a station's display name.
    pub async fn get(&self, id: StationId) -> Option<String> {
        let guard = self.inner.read().await;
        guard.get(&id).cloned()
    }

    /// A copy of the full mapping, in ascending id order.
    pub async fn snapshot(&self) -> BTreeMap<StationId, String> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Number of indexed stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the index is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-scrape the overview page and replace the mapping atomically.
    ///
    /// On failure the existing mapping is preserved and the error is
    /// returned.
    pub async fn refresh(&self) -> Result<usize, ScrapeError> {
        let map = scrape_overview(&self.client, &self.patterns).await?;
        let count = map.len();

        let mut guard = self.inner.write().await;
        *guard = map;

        Ok(count)
    }
}

/// Fetch and extract the overview page.
async fn scrape_overview(
    client: &KvbClient,
    patterns: &UrlPatterns,
) -> Result<BTreeMap<StationId, String>, ScrapeError> {
    let body = client.fetch_page(OVERVIEW_PATH).await?;
    let map = {
        let doc = Html::parse_document(&body);
        extract_station_index(&doc, patterns)
    };

    if map.is_empty() {
        return Err(ScrapeError::extraction(
            PageKind::StationIndex,
            "no station links on overview page",
        ));
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kvb::KvbConfig;

    fn preloaded(entries: &[(u32, &str)]) -> StationIndex {
        let map = entries
            .iter()
            .map(|(id, name)| (StationId::new(*id), name.to_string()))
            .collect();
        let client = KvbClient::new(KvbConfig::default()).unwrap();
        StationIndex::preloaded(map, client, Arc::new(UrlPatterns::default()))
    }

    #[tokio::test]
    async fn lookup_hits_and_misses() {
        let index = preloaded(&[(100, "Central"), (200, "Neumarkt")]);

        assert_eq!(index.get(StationId::new(100)).await, Some("Central".to_string()));
        assert_eq!(index.get(StationId::new(999)).await, None);
        assert_eq!(index.len().await, 2);
        assert!(!index.is_empty().await);
    }

    #[tokio::test]
    async fn snapshot_is_sorted_by_id() {
        let index = preloaded(&[(300, "C"), (100, "A"), (200, "B")]);

        let names: Vec<String> = index.snapshot().await.into_values().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn snapshot_is_a_copy() {
        let index = preloaded(&[(100, "Central")]);

        let mut snapshot = index.snapshot().await;
        snapshot.insert(StationId::new(1), "intruder".to_string());

        assert_eq!(index.len().await, 1);
    }
}
