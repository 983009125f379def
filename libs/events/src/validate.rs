//! Field-level validation for vehicle events.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::event::VehicleEvent;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Unix seconds of `0001-01-01T00:00:00Z`, the conventional zero instant.
const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

/// Validate an event, returning the first violated constraint.
///
/// Checks run in a fixed order: `event_id`, `vehicle_id`, `latitude`,
/// `longitude`, `speed`, `event_type`, `timestamp`.
pub fn validate(event: &VehicleEvent) -> Result<(), ValidationError> {
    if event.event_id.is_empty() {
        return Err(ValidationError::MissingField("event_id"));
    }

    if event.vehicle_id.is_empty() {
        return Err(ValidationError::MissingField("vehicle_id"));
    }

    check_range("latitude", event.latitude, LATITUDE_RANGE)?;
    check_range("longitude", event.longitude, LONGITUDE_RANGE)?;

    if event.speed < 0.0 {
        return Err(ValidationError::Negative("speed"));
    }

    if event.event_type.is_empty() {
        return Err(ValidationError::MissingField("event_type"));
    }

    match event.timestamp {
        Some(ts) if !is_zero_instant(&ts) => Ok(()),
        _ => Err(ValidationError::MissingField("timestamp")),
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    // NaN is never contained
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn is_zero_instant(ts: &DateTime<Utc>) -> bool {
    ts.timestamp() == ZERO_INSTANT_SECS && ts.timestamp_subsec_nanos() == 0
}
