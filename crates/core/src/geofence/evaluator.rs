//! Proximity evaluator: turns position samples into zone ENTER/EXIT events.
//!
//! Pure logic with no I/O and no internal locking. Callers that receive
//! samples from several sources must serialize calls to one instance (the
//! API server keeps it behind a `tokio::sync::Mutex`).

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::TimestampMillis;

use super::zone::{is_valid_coordinate, Coordinate, Zone};
use super::GeofenceError;

/// A position reading delivered by the sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    pub lat: f64,
    pub lng: f64,
    pub timestamp_millis: TimestampMillis,
}

impl PositionSample {
    pub fn new(lat: f64, lng: f64, timestamp_millis: TimestampMillis) -> Self {
        Self {
            lat,
            lng,
            timestamp_millis,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Direction of a membership transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Enter,
    Exit,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Enter => "enter",
            AlertKind::Exit => "exit",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported zone transition. Ownership passes to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub zone_id: String,
    pub kind: AlertKind,
    /// Timestamp of the sample that caused the transition.
    pub at: TimestampMillis,
    pub sample: PositionSample,
}

/// Per-zone membership state, owned by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMembership {
    pub zone_id: String,
    pub inside: bool,
    /// Set only when a flip of `inside` is reported.
    pub last_transition_at: Option<TimestampMillis>,
}

impl ZoneMembership {
    fn new(zone_id: String) -> Self {
        Self {
            zone_id,
            inside: false,
            last_transition_at: None,
        }
    }

    fn clear(&mut self) {
        self.inside = false;
        self.last_transition_at = None;
    }

    fn record(&mut self, kind: AlertKind, at: TimestampMillis) {
        self.inside = kind == AlertKind::Enter;
        self.last_transition_at = Some(at);
    }
}

/// Evaluates position samples against a fixed, ordered set of zones.
///
/// Memberships are created eagerly, one per zone, in configuration order,
/// so `zones[i]` and `memberships[i]` always describe the same zone.
#[derive(Debug)]
pub struct ProximityEvaluator {
    zones: Vec<Zone>,
    memberships: Vec<ZoneMembership>,
    debounce_window: Option<Duration>,
}

impl ProximityEvaluator {
    /// Create an evaluator that reports every transition.
    pub fn new(zones: Vec<Zone>) -> Result<Self, GeofenceError> {
        Self::with_debounce(zones, None)
    }

    /// Create an evaluator with an optional debounce window.
    ///
    /// A zero-length window behaves like no window.
    pub fn with_debounce(
        zones: Vec<Zone>,
        debounce_window: Option<Duration>,
    ) -> Result<Self, GeofenceError> {
        let mut seen = HashSet::with_capacity(zones.len());
        for zone in &zones {
            zone.validate()?;
            if !seen.insert(zone.id.as_str()) {
                return Err(GeofenceError::Configuration(format!(
                    "duplicate zone id '{}'",
                    zone.id
                )));
            }
        }

        let memberships = zones
            .iter()
            .map(|z| ZoneMembership::new(z.id.clone()))
            .collect();

        Ok(Self {
            zones,
            memberships,
            debounce_window: debounce_window.filter(|w| !w.is_zero()),
        })
    }

    /// Evaluate one sample and return the transitions it caused, in zone
    /// configuration order.
    ///
    /// An out-of-range sample is rejected before any state is touched.
    pub fn evaluate(&mut self, sample: &PositionSample) -> Result<Vec<AlertEvent>, GeofenceError> {
        if !is_valid_coordinate(sample.lat, sample.lng) {
            return Err(GeofenceError::InvalidSample {
                lat: sample.lat,
                lng: sample.lng,
            });
        }

        let point = sample.coordinate();
        let window_ms = self.debounce_window_millis();
        let mut events = Vec::new();

        for (zone, membership) in self.zones.iter().zip(self.memberships.iter_mut()) {
            let inside = zone.contains(&point);
            if inside == membership.inside {
                continue;
            }

            let kind = if inside {
                AlertKind::Enter
            } else {
                AlertKind::Exit
            };

            // Only re-entries are debounced, measured from the last EXIT.
            // Exits are never suppressed.
            if kind == AlertKind::Enter {
                if let (Some(window), Some(last)) = (window_ms, membership.last_transition_at) {
                    // Out-of-order timestamps give a negative delta, which
                    // counts as inside the window.
                    if sample.timestamp_millis.saturating_sub(last) < window {
                        continue;
                    }
                }
            }

            membership.record(kind, sample.timestamp_millis);
            events.push(AlertEvent {
                zone_id: zone.id.clone(),
                kind,
                at: sample.timestamp_millis,
                sample: *sample,
            });
        }

        Ok(events)
    }

    /// Ids of the zones the tracked position is currently inside.
    pub fn currently_inside(&self) -> BTreeSet<String> {
        self.memberships
            .iter()
            .filter(|m| m.inside)
            .map(|m| m.zone_id.clone())
            .collect()
    }

    /// Clear membership for one zone, or all zones when `zone_id` is `None`.
    ///
    /// Emits nothing. Returns the number of zones cleared, which is 0 for an
    /// unknown id.
    pub fn reset(&mut self, zone_id: Option<&str>) -> usize {
        let mut cleared = 0;
        for membership in &mut self.memberships {
            if zone_id.is_none_or(|id| id == membership.zone_id) {
                membership.clear();
                cleared += 1;
            }
        }
        cleared
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn membership(&self, zone_id: &str) -> Option<&ZoneMembership> {
        self.memberships.iter().find(|m| m.zone_id == zone_id)
    }

    pub fn debounce_window(&self) -> Option<Duration> {
        self.debounce_window
    }

    fn debounce_window_millis(&self) -> Option<i64> {
        self.debounce_window
            .map(|w| i64::try_from(w.as_millis()).unwrap_or(i64::MAX))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
