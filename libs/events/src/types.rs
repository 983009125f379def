//! Event type tags.

use serde::{Deserialize, Serialize};

// =============================================================================
// Event Type Constants
// =============================================================================

/// Wire names of the known event types.
pub mod event_types {
    pub const POSITION: &str = "position";
    pub const SPEED_ALERT: &str = "speed_alert";
    pub const GEOFENCE: &str = "geofence";
    pub const ENGINE_START: &str = "engine_start";
    pub const ENGINE_STOP: &str = "engine_stop";
}

// =============================================================================
// EventType
// =============================================================================

/// The declared type of a vehicle event.
///
/// The set is open: any string that is not a known type is kept verbatim in
/// [`EventType::Other`]. An empty string also lands in `Other` and is
/// rejected by validation, not by decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Position,
    SpeedAlert,
    Geofence,
    EngineStart,
    EngineStop,
    Other(String),
}

impl EventType {
    /// Wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Position => event_types::POSITION,
            EventType::SpeedAlert => event_types::SPEED_ALERT,
            EventType::Geofence => event_types::GEOFENCE,
            EventType::EngineStart => event_types::ENGINE_START,
            EventType::EngineStop => event_types::ENGINE_STOP,
            EventType::Other(s) => s,
        }
    }

    /// Returns true if no type was declared.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Other(String::new())
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            event_types::POSITION => EventType::Position,
            event_types::SPEED_ALERT => EventType::SpeedAlert,
            event_types::GEOFENCE => EventType::Geofence,
            event_types::ENGINE_START => EventType::EngineStart,
            event_types::ENGINE_STOP => EventType::EngineStop,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match EventType::from(s.as_str()) {
            EventType::Other(_) => EventType::Other(s),
            known => known,
        }
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        match t {
            EventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_parse() {
        assert_eq!(EventType::from("position"), EventType::Position);
        assert_eq!(EventType::from("speed_alert"), EventType::SpeedAlert);
        assert_eq!(EventType::from("geofence"), EventType::Geofence);
        assert_eq!(EventType::from("engine_start"), EventType::EngineStart);
        assert_eq!(EventType::from("engine_stop"), EventType::EngineStop);
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let t = EventType::from("tire_pressure".to_string());
        assert_eq!(t, EventType::Other("tire_pressure".to_string()));
        assert_eq!(t.to_string(), "tire_pressure");
    }

    #[test]
    fn test_type_names_are_case_sensitive() {
        assert_eq!(
            EventType::from("Position"),
            EventType::Other("Position".to_string())
        );
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&EventType::SpeedAlert).unwrap(),
            "\"speed_alert\""
        );
        let t: EventType = serde_json::from_str("\"engine_stop\"").unwrap();
        assert_eq!(t, EventType::EngineStop);
        let t: EventType = serde_json::from_str("\"door_open\"").unwrap();
        assert_eq!(t, EventType::Other("door_open".to_string()));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(EventType::default().is_empty());
        assert!(!EventType::Position.is_empty());
    }
}
