//! Processing statistics endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Aggregate processing statistics.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Events processed across all vehicles.
    pub total_events_processed: u64,

    /// Vehicles with at least one processed event.
    pub vehicles_tracked: usize,

    /// Current timestamp (RFC 3339).
    pub timestamp: String,
}

/// Processing statistics for one vehicle.
#[derive(Debug, Serialize)]
pub struct VehicleStatsResponse {
    pub vehicle_id: String,
    pub events_processed: u64,
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let processor = state.processor();
    Json(StatsResponse {
        total_events_processed: processor.total_event_count(),
        vehicles_tracked: processor.vehicle_count(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// GET /api/v1/stats/vehicles/{vehicle_id}
///
/// Unknown vehicles report zero.
pub async fn get_vehicle_stats(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> impl IntoResponse {
    let events_processed = state.processor().event_count(&vehicle_id);
    Json(VehicleStatsResponse {
        vehicle_id,
        events_processed,
    })
}
