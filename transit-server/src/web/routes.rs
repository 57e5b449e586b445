//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::Value;

use crate::domain::{DepartureEntry, LineId, StationId};
use crate::scrape::ScrapeError;

use super::dto::{ErrorResponse, IndexResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/stations/", get(stations_list))
        .route("/stations/:station_id/", get(station_details))
        .route("/stations/:station_id/lines/:line_id/", get(line_stations))
        .route("/stations/:station_id/departures/", get(station_departures))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Discovery document.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::current())
}

/// Full station list.
async fn stations_list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let value = state.service.stations_json().await?;
    Ok(Json(value.as_ref().clone()))
}

/// Details for one station.
async fn station_details(
    State(state): State<AppState>,
    Path(station_id): Path<u32>,
) -> Result<Json<Value>, AppError> {
    let value = state
        .service
        .station_detail_json(StationId::new(station_id))
        .await?;
    Ok(Json(value.as_ref().clone()))
}

/// The stations a line serves, from one station's perspective.
async fn line_stations(
    State(state): State<AppState>,
    Path((station_id, line_id)): Path<(u32, u32)>,
) -> Result<Json<Value>, AppError> {
    let value = state
        .service
        .line_route_json(StationId::new(station_id), LineId::new(line_id))
        .await?;
    Ok(Json(value.as_ref().clone()))
}

/// Live departures for one station. Never cached.
async fn station_departures(
    State(state): State<AppState>,
    Path(station_id): Path<u32>,
) -> Result<Json<Vec<DepartureEntry>>, AppError> {
    let departures = state.service.departures(StationId::new(station_id)).await?;
    Ok(Json(departures))
}

/// Application-level errors returned by route handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    fn from_scrape(e: &ScrapeError) -> Self {
        match e {
            ScrapeError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            ScrapeError::Http(_)
            | ScrapeError::UpstreamStatus { .. }
            | ScrapeError::Extraction { .. } => AppError::Upstream {
                message: e.to_string(),
            },
            ScrapeError::Serialize(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<ScrapeError> for AppError {
    fn from(e: ScrapeError) -> Self {
        AppError::from_scrape(&e)
    }
}

impl From<Arc<ScrapeError>> for AppError {
    fn from(e: Arc<ScrapeError>) -> Self {
        AppError::from_scrape(&e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
