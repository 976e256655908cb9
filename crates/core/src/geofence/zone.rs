//! Circular zone geometry.
//!
//! Distances are planar Euclidean in degree-space, converted to meters with a
//! single constant ([`METERS_PER_DEGREE`]). This is a local approximation: it
//! ignores longitude convergence towards the poles and is only meaningful for
//! small zones. It is kept because the dashboard's map circles are drawn with
//! the same conversion, so containment and rendering agree on the boundary.

use serde::{Deserialize, Serialize};

use super::GeofenceError;

/// Meters per degree of arc, used for every degree <-> meter conversion.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Valid latitude range, inclusive.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range, inclusive.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lng)
    }

    /// Planar distance to `other` in degrees.
    pub fn degree_distance(&self, other: &Coordinate) -> f64 {
        (self.lat - other.lat).hypot(self.lng - other.lng)
    }

    /// Planar distance to `other` in meters (see module docs).
    pub fn distance_meters(&self, other: &Coordinate) -> f64 {
        degrees_to_meters(self.degree_distance(other))
    }
}

/// Check that a latitude/longitude pair is finite and in range.
///
/// NaN fails both range checks, so no separate finiteness test is needed.
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    LATITUDE_RANGE.contains(&lat) && LONGITUDE_RANGE.contains(&lng)
}

pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE
}

pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// An immutable circular geofence. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub center: Coordinate,
    pub radius_meters: f64,
}

impl Zone {
    pub fn new(id: impl Into<String>, center: Coordinate, radius_meters: f64) -> Self {
        Self {
            id: id.into(),
            center,
            radius_meters,
        }
    }

    /// Build a zone from a radius expressed in degrees, the unit the
    /// dashboard's hard-coded danger zones were written in.
    pub fn from_degree_radius(
        id: impl Into<String>,
        center: Coordinate,
        radius_degrees: f64,
    ) -> Self {
        Self::new(id, center, degrees_to_meters(radius_degrees))
    }

    /// Radius in degrees, for callers that draw in degree-space.
    pub fn radius_degrees(&self) -> f64 {
        meters_to_degrees(self.radius_meters)
    }

    /// Whether `point` lies strictly inside the zone.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.center.distance_meters(point) < self.radius_meters
    }

    /// Check the zone definition on its own (duplicate ids are checked by
    /// the evaluator, which sees the whole set).
    pub fn validate(&self) -> Result<(), GeofenceError> {
        if self.id.trim().is_empty() {
            return Err(GeofenceError::Configuration(
                "zone id must not be empty".to_string(),
            ));
        }
        if !self.center.is_valid() {
            return Err(GeofenceError::Configuration(format!(
                "zone '{}' has an out-of-range center ({}, {})",
                self.id, self.center.lat, self.center.lng
            )));
        }
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(GeofenceError::Configuration(format!(
                "zone '{}' radius must be a positive number of meters, got {}",
                self.id, self.radius_meters
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
