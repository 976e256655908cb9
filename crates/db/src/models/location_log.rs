//! Location log entity (append-only).
//!
//! JSON field names are camelCase to match what the dashboard posts.

use safepath_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored location reading.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLog {
    pub id: DbId,
    pub latitude: f64,
    pub longitude: f64,
    pub network_type: Option<String>,
    pub speed: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new location reading.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationLog {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub network_type: Option<String>,
    #[serde(default)]
    pub speed: Option<f64>,
}
