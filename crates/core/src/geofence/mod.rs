//! Circular-zone geofencing.
//!
//! Contains the zone geometry, the proximity evaluator and the zone
//! configuration loader. All logic in this module is pure (no DB access) so
//! it can be tested in isolation; the API server owns the single evaluator
//! instance and feeds it samples.

pub mod config;
pub mod evaluator;
pub mod zone;

pub use config::{ZoneConfig, ZoneDefinition};
pub use evaluator::{AlertEvent, AlertKind, PositionSample, ProximityEvaluator, ZoneMembership};
pub use zone::{Coordinate, Zone, METERS_PER_DEGREE};

/// Errors raised by the geofencing component.
#[derive(Debug, thiserror::Error)]
pub enum GeofenceError {
    /// Invalid or duplicate zone definitions. Fatal to building an evaluator.
    #[error("Zone configuration error: {0}")]
    Configuration(String),

    /// A sample with out-of-range coordinates. Only that sample is rejected.
    #[error("Invalid position sample: lat {lat}, lng {lng}")]
    InvalidSample { lat: f64, lng: f64 },
}
