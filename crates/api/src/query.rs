//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for list endpoints. Clamped with
/// [`safepath_core::location::clamp_limit`].
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?limit=&zoneId=` for the alert list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertListParams {
    pub limit: Option<i64>,
    pub zone_id: Option<String>,
}
