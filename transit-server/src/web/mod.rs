//! HTTP serving layer.
//!
//! Thin axum shell over [`crate::service::TransitService`]: each route
//! resolves to one orchestrator call and serializes its record.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, IndexResponse, MethodMap};
pub use routes::{AppError, create_router};
pub use state::AppState;
