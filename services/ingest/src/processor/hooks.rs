//! Type-specific side effects for processed events.

use fleet_events::VehicleEvent;
use tracing::{debug, info, warn};

/// Observational handlers invoked once per valid event, chosen by type.
///
/// Hooks cannot fail; they run before the event is counted.
pub trait EventHooks: Send + Sync {
    fn speed_alert(&self, event: &VehicleEvent);
    fn geofence(&self, event: &VehicleEvent);
    fn position(&self, event: &VehicleEvent);

    /// Engine state changes and any type without a dedicated hook.
    fn generic(&self, event: &VehicleEvent);
}

/// Emits a structured log entry per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl EventHooks for TracingHooks {
    fn speed_alert(&self, event: &VehicleEvent) {
        let timestamp = event
            .timestamp
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();
        warn!(
            vehicle_id = %event.vehicle_id,
            speed = event.speed,
            timestamp = %timestamp,
            "Speed alert detected"
        );
    }

    fn geofence(&self, event: &VehicleEvent) {
        info!(
            vehicle_id = %event.vehicle_id,
            location = %event.location(),
            "Geofence event"
        );
    }

    fn position(&self, event: &VehicleEvent) {
        debug!(
            vehicle_id = %event.vehicle_id,
            location = %event.location(),
            "Position updated"
        );
    }

    fn generic(&self, event: &VehicleEvent) {
        info!(
            vehicle_id = %event.vehicle_id,
            event_type = %event.event_type,
            "Generic event processed"
        );
    }
}
