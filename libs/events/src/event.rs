//! The vehicle event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::types::EventType;

/// One telemetry report from a vehicle at a point in time.
///
/// Fields missing from the input, or set to `null`, decode to their zero
/// values so that [`validate`](crate::validate) can name the missing field
/// instead of the decoder failing on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleEvent {
    /// Caller-assigned unique event identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub event_id: String,

    /// Reporting vehicle; the aggregation key for counting.
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_id: String,

    /// Latitude in degrees, [-90, 90].
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,

    /// Longitude in degrees, [-180, 180].
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,

    /// Ground speed, non-negative.
    #[serde(deserialize_with = "null_as_default")]
    pub speed: f64,

    /// Bearing in degrees. Not range-checked.
    #[serde(deserialize_with = "null_as_default")]
    pub heading: f64,

    /// When the event occurred (RFC 3339 on the wire).
    pub timestamp: Option<DateTime<Utc>>,

    /// Declared event type.
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: EventType,

    /// Driver at the wheel, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl VehicleEvent {
    /// Create an event with the required identity fields set and all
    /// measurements zeroed.
    pub fn new(
        event_id: impl Into<String>,
        vehicle_id: impl Into<String>,
        event_type: impl Into<EventType>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            vehicle_id: vehicle_id.into(),
            event_type: event_type.into(),
            timestamp: Some(timestamp),
            ..Default::default()
        }
    }

    /// Set the coordinate pair.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set speed and heading.
    pub fn with_motion(mut self, speed: f64, heading: f64) -> Self {
        self.speed = speed;
        self.heading = heading;
        self
    }

    /// Set the driver.
    pub fn with_driver(mut self, driver_id: impl Into<String>) -> Self {
        self.driver_id = Some(driver_id.into());
        self
    }

    /// Check this event against its field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validate(self)
    }

    /// Coordinate pair formatted as `lat,lon` with six decimals.
    pub fn location(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }
}
