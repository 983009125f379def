//! API v1 routes.

mod events;
mod stats;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create API v1 routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(events::ingest_event))
        .route("/stats", get(stats::get_stats))
        .route("/stats/vehicles/{vehicle_id}", get(stats::get_vehicle_stats))
}
