//! Metrics collection for Prometheus integration.
//!
//! The processor only sees the [`MetricsRecorder`] trait. The binary wires in
//! [`PrometheusMetrics`]; tests and embedders that don't export metrics use
//! [`NoopMetrics`].

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use thiserror::Error;

/// Errors from metric registration or export.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Sink for processing metrics.
pub trait MetricsRecorder: Send + Sync {
    /// Count a validation outcome.
    fn record_validation(&self, success: bool);

    /// Count a successfully processed event.
    fn record_event_processed(&self, event_type: &str, vehicle_id: &str);

    /// Observe how long processing an event took.
    fn record_processing_duration(&self, event_type: &str, seconds: f64);

    /// A vehicle was counted for the first time.
    fn vehicle_added(&self);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsRecorder for NoopMetrics {
    fn record_validation(&self, _success: bool) {}
    fn record_event_processed(&self, _event_type: &str, _vehicle_id: &str) {}
    fn record_processing_duration(&self, _event_type: &str, _seconds: f64) {}
    fn vehicle_added(&self) {}
}

/// Prometheus-backed recorder with its own registry.
pub struct PrometheusMetrics {
    registry: Registry,

    /// Processed events by type and vehicle.
    events_processed: IntCounterVec,

    /// Validation outcomes ("success" / "failed").
    events_validation: IntCounterVec,

    /// Processing latency by type.
    processing_latency: HistogramVec,

    /// Vehicles tracked by the counting store.
    active_vehicles: IntGauge,
}

impl PrometheusMetrics {
    /// Create and register all collectors in a fresh registry.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let events_processed = IntCounterVec::new(
            Opts::new(
                "fleet_events_processed_total",
                "Total number of vehicle events processed",
            ),
            &["event_type", "vehicle_id"],
        )?;
        registry.register(Box::new(events_processed.clone()))?;

        let events_validation = IntCounterVec::new(
            Opts::new(
                "fleet_events_validation_total",
                "Total number of validation results",
            ),
            &["status"],
        )?;
        registry.register(Box::new(events_validation.clone()))?;

        let processing_latency = HistogramVec::new(
            HistogramOpts::new(
                "fleet_event_processing_duration_seconds",
                "Event processing latency in seconds",
            ),
            &["event_type"],
        )?;
        registry.register(Box::new(processing_latency.clone()))?;

        let active_vehicles = IntGauge::with_opts(Opts::new(
            "fleet_active_vehicles",
            "Number of active vehicles currently tracked",
        ))?;
        registry.register(Box::new(active_vehicles.clone()))?;

        Ok(Self {
            registry,
            events_processed,
            events_validation,
            processing_latency,
            active_vehicles,
        })
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl MetricsRecorder for PrometheusMetrics {
    fn record_validation(&self, success: bool) {
        let status = if success { "success" } else { "failed" };
        self.events_validation.with_label_values(&[status]).inc();
    }

    fn record_event_processed(&self, event_type: &str, vehicle_id: &str) {
        self.events_processed
            .with_label_values(&[event_type, vehicle_id])
            .inc();
    }

    fn record_processing_duration(&self, event_type: &str, seconds: f64) {
        self.processing_latency
            .with_label_values(&[event_type])
            .observe(seconds);
    }

    fn vehicle_added(&self) {
        self.active_vehicles.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_labeled() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_event_processed("position", "vehicle-1");
        metrics.record_event_processed("position", "vehicle-1");
        metrics.record_validation(true);
        metrics.record_validation(false);

        assert_eq!(
            metrics
                .events_processed
                .with_label_values(&["position", "vehicle-1"])
                .get(),
            2
        );
        assert_eq!(
            metrics.events_validation.with_label_values(&["success"]).get(),
            1
        );
        assert_eq!(
            metrics.events_validation.with_label_values(&["failed"]).get(),
            1
        );
    }

    #[test]
    fn test_render_contains_metric_names() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_event_processed("geofence", "vehicle-2");
        metrics.record_processing_duration("geofence", 0.002);
        for _ in 0..3 {
            metrics.vehicle_added();
        }

        let text = metrics.render().unwrap();
        assert!(text.contains("fleet_events_processed_total"));
        assert!(text.contains("vehicle_id=\"vehicle-2\""));
        assert!(text.contains("fleet_event_processing_duration_seconds_bucket"));
        assert!(text.contains("fleet_active_vehicles 3"));
    }

    #[test]
    fn test_registries_are_independent() {
        // Each instance owns its registry, so creating two must not collide.
        let a = PrometheusMetrics::new().unwrap();
        let b = PrometheusMetrics::new().unwrap();
        a.vehicle_added();
        for _ in 0..5 {
            b.vehicle_added();
        }
        assert!(a.render().unwrap().contains("fleet_active_vehicles 1"));
        assert!(b.render().unwrap().contains("fleet_active_vehicles 5"));
    }
}
