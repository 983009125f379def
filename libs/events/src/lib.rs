//! # fleet-events
//!
//! Vehicle telemetry event model and validation for fleet-event-stream.
//!
//! ## Design Principles
//!
//! - An event is a single telemetry report from one vehicle at one instant
//! - Events are validated before any processing happens
//! - Validation reports the first violated constraint only
//! - Unknown event types are carried through, not rejected
//!
//! ## Event Types
//!
//! Known types have dedicated handling downstream:
//! - `position`
//! - `speed_alert`
//! - `geofence`
//! - `engine_start` / `engine_stop`
//!
//! Any other non-empty type is preserved as [`EventType::Other`].

mod error;
mod event;
mod types;
mod validate;

pub use error::ValidationError;
pub use event::VehicleEvent;
pub use types::*;
pub use validate::validate;
