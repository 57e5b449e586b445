use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use transit_server::cache::CacheConfig;
use transit_server::kvb::{KvbClient, KvbConfig};
use transit_server::scrape::UrlPatterns;
use transit_server::service::TransitService;
use transit_server::stations::StationIndex;
use transit_server::web::{AppState, create_router};

/// How often to re-scrape the station index (24 hours).
const INDEX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Optional overrides from the environment
    let mut kvb_config = KvbConfig::default();
    if let Ok(base_url) = std::env::var("KVB_BASE_URL") {
        kvb_config = kvb_config.with_base_url(base_url);
    }

    let client = KvbClient::new(kvb_config).expect("Failed to create KVB client");
    let patterns = Arc::new(UrlPatterns::default());

    // Build the station index before accepting requests (fail fast)
    println!("Scraping station index from {}...", client.base_url());
    let stations = StationIndex::fetch(client.clone(), Arc::clone(&patterns))
        .await
        .expect("Failed to build station index");
    println!("Indexed {} stations", stations.len().await);

    // Spawn background task to re-scrape the index daily
    let stations_refresh = stations.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(INDEX_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match stations_refresh.refresh().await {
                Ok(count) => println!("Refreshed station index: {} stations", count),
                Err(e) => eprintln!("Failed to refresh station index: {}", e),
            }
        }
    });

    let service = TransitService::new(client, patterns, stations, &CacheConfig::default());
    let state = AppState::new(service);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)));

    println!("Transit API listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /                                         - Discovery document");
    println!("  GET  /health                                   - Health check");
    println!("  GET  /stations/                                - Station list");
    println!("  GET  /stations/{{station_id}}/                   - Station details");
    println!("  GET  /stations/{{station_id}}/lines/{{line_id}}/   - Line route");
    println!("  GET  /stations/{{station_id}}/departures/        - Live departures");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
