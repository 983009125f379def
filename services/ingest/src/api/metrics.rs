//! Prometheus scrape endpoint, served on its own listener.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::error;

use crate::api::error::ApiError;
use crate::metrics::PrometheusMetrics;

const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Create the metrics exporter router.
pub fn create_metrics_router(metrics: Arc<PrometheusMetrics>) -> Router {
    Router::new()
        .route("/metrics", get(scrape))
        .with_state(metrics)
}

async fn scrape(State(metrics): State<Arc<PrometheusMetrics>>) -> Result<Response, ApiError> {
    let body = metrics.render().map_err(|e| {
        error!(error = %e, "Failed to render metrics");
        ApiError::internal("metrics_unavailable", "failed to render metrics")
    })?;

    let mut response = body.into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
    Ok(response)
}
