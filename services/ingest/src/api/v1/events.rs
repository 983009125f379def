//! Event ingestion endpoint.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fleet_events::VehicleEvent;
use serde::Serialize;
use tracing::{error, info};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// Acknowledgement for an accepted event.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Always "accepted".
    pub status: &'static str,

    /// ID of the accepted event.
    pub event_id: String,
}

/// Ingest a single vehicle event.
///
/// POST /api/v1/events
pub async fn ingest_event(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<VehicleEvent>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(event) = payload.map_err(|rejection| {
        error!(
            error = %rejection,
            request_id = %ctx.request_id,
            "Failed to decode event"
        );
        state.metrics().record_validation(false);
        ApiError::bad_request("invalid_request_body", "invalid request body")
            .with_request_id(ctx.request_id.clone())
    })?;

    let started = Instant::now();

    state.processor().process(&event).map_err(|e| {
        ApiError::bad_request("validation_failed", e.to_string())
            .with_request_id(ctx.request_id.clone())
            .with_field(e.validation().field())
    })?;

    info!(
        event_id = %event.event_id,
        vehicle_id = %event.vehicle_id,
        request_id = %ctx.request_id,
        duration_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Event ingested"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(IngestResponse {
            status: "accepted",
            event_id: event.event_id,
        }),
    ))
}
