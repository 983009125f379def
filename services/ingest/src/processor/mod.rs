//! Event processing: validation, type dispatch and counting.
//!
//! A single [`EventProcessor`] is shared by every request handler. Each call
//! to [`EventProcessor::process`] runs synchronously:
//!
//! 1. validate the event (refused events leave no trace in the counts)
//! 2. dispatch to the hook for its type
//! 3. count it against its vehicle
//! 4. record metrics

mod counter;
mod hooks;

pub use counter::EventCounter;
pub use hooks::{EventHooks, TracingHooks};

use std::sync::Arc;
use std::time::Instant;

use fleet_events::{EventType, VehicleEvent};
use tracing::{error, info, instrument};

use crate::error::ProcessingError;
use crate::metrics::{MetricsRecorder, NoopMetrics};

/// Validates, dispatches and counts vehicle events.
pub struct EventProcessor {
    counter: EventCounter,
    hooks: Arc<dyn EventHooks>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl EventProcessor {
    /// Create a processor with injected hooks and metrics.
    pub fn new(hooks: Arc<dyn EventHooks>, metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            counter: EventCounter::new(),
            hooks,
            metrics,
        }
    }

    /// Process a single event.
    ///
    /// Returns an error only if validation fails, in which case nothing is
    /// counted.
    #[instrument(skip(self, event), fields(event_id = %event.event_id, event_type = %event.event_type))]
    pub fn process(&self, event: &VehicleEvent) -> Result<(), ProcessingError> {
        let started = Instant::now();

        if let Err(e) = event.validate() {
            error!(
                error = %e,
                vehicle_id = %event.vehicle_id,
                "Event validation failed"
            );
            self.metrics.record_validation(false);
            return Err(e.into());
        }

        self.dispatch(event);

        let (vehicle_total, first_event) = self.counter.increment(&event.vehicle_id);

        let event_type = event.event_type.as_str();
        self.metrics.record_validation(true);
        self.metrics
            .record_event_processed(event_type, &event.vehicle_id);
        self.metrics
            .record_processing_duration(event_type, started.elapsed().as_secs_f64());
        if first_event {
            self.metrics.vehicle_added();
        }

        info!(
            vehicle_id = %event.vehicle_id,
            vehicle_total,
            "Event processed successfully"
        );
        Ok(())
    }

    fn dispatch(&self, event: &VehicleEvent) {
        match &event.event_type {
            EventType::SpeedAlert => self.hooks.speed_alert(event),
            EventType::Geofence => self.hooks.geofence(event),
            EventType::Position => self.hooks.position(event),
            EventType::EngineStart | EventType::EngineStop | EventType::Other(_) => {
                self.hooks.generic(event)
            }
        }
    }

    /// Events processed for `vehicle_id`, 0 if none.
    pub fn event_count(&self, vehicle_id: &str) -> u64 {
        self.counter.get(vehicle_id)
    }

    /// Events processed across all vehicles.
    pub fn total_event_count(&self) -> u64 {
        self.counter.total()
    }

    /// Number of vehicles with at least one processed event.
    pub fn vehicle_count(&self) -> usize {
        self.counter.len()
    }
}

impl Default for EventProcessor {
    /// Log-only hooks, no metrics.
    fn default() -> Self {
        Self::new(Arc::new(TracingHooks), Arc::new(NoopMetrics))
    }
}
