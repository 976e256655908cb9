//! Persisted zone transitions.

use safepath_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A zone ENTER/EXIT transition as stored in `zone_alerts`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAlert {
    pub id: DbId,
    pub zone_id: String,
    /// `"enter"` or `"exit"`.
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sample_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a zone alert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneAlert {
    pub zone_id: String,
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sample_at: Timestamp,
}
