//! Zone configuration loaded once at startup.
//!
//! File format (JSON):
//!
//! ```json
//! {
//!   "debounceSecs": 30,
//!   "zones": [
//!     { "id": "depot", "lat": 19.045, "lng": 72.850, "radiusMeters": 500 },
//!     { "id": "harbour", "lat": 18.94, "lng": 72.84, "radiusDegrees": 0.005 }
//!   ]
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::evaluator::ProximityEvaluator;
use super::zone::{Coordinate, Zone};
use super::GeofenceError;

/// Id of the built-in zone used when no zone file is configured.
pub const DEFAULT_ZONE_ID: &str = "danger-1";

/// Center of the built-in zone.
pub const DEFAULT_ZONE_CENTER: Coordinate = Coordinate {
    lat: 19.045,
    lng: 72.850,
};

/// Radius of the built-in zone, in degrees.
pub const DEFAULT_ZONE_RADIUS_DEGREES: f64 = 0.005;

/// One zone entry as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ZoneDefinition {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub radius_meters: Option<f64>,
    #[serde(default)]
    pub radius_degrees: Option<f64>,
}

impl ZoneDefinition {
    /// Resolve the entry into a [`Zone`]. Exactly one radius unit must be given.
    pub fn to_zone(&self) -> Result<Zone, GeofenceError> {
        let center = Coordinate::new(self.lat, self.lng);
        match (self.radius_meters, self.radius_degrees) {
            (Some(meters), None) => Ok(Zone::new(self.id.clone(), center, meters)),
            (None, Some(degrees)) => Ok(Zone::from_degree_radius(self.id.clone(), center, degrees)),
            (Some(_), Some(_)) => Err(GeofenceError::Configuration(format!(
                "zone '{}' sets both radiusMeters and radiusDegrees",
                self.id
            ))),
            (None, None) => Err(GeofenceError::Configuration(format!(
                "zone '{}' needs radiusMeters or radiusDegrees",
                self.id
            ))),
        }
    }
}

/// The full zone configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ZoneConfig {
    #[serde(default)]
    pub debounce_secs: Option<u64>,
    pub zones: Vec<ZoneDefinition>,
}

impl Default for ZoneConfig {
    /// The single hard-coded danger zone the dashboard shipped with.
    fn default() -> Self {
        Self {
            debounce_secs: None,
            zones: vec![ZoneDefinition {
                id: DEFAULT_ZONE_ID.to_string(),
                lat: DEFAULT_ZONE_CENTER.lat,
                lng: DEFAULT_ZONE_CENTER.lng,
                radius_meters: None,
                radius_degrees: Some(DEFAULT_ZONE_RADIUS_DEGREES),
            }],
        }
    }
}

impl ZoneConfig {
    pub fn from_json(json: &str) -> Result<Self, GeofenceError> {
        serde_json::from_str(json)
            .map_err(|e| GeofenceError::Configuration(format!("invalid zone file: {e}")))
    }

    /// Read and parse a zone file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeofenceError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GeofenceError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    pub fn debounce_window(&self) -> Option<Duration> {
        self.debounce_secs.map(Duration::from_secs)
    }

    pub fn to_zones(&self) -> Result<Vec<Zone>, GeofenceError> {
        self.zones.iter().map(ZoneDefinition::to_zone).collect()
    }

    /// Build the evaluator described by this configuration.
    pub fn build_evaluator(&self) -> Result<ProximityEvaluator, GeofenceError> {
        ProximityEvaluator::with_debounce(self.to_zones()?, self.debounce_window())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
