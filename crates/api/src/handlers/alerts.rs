//! Handlers for persisted zone alerts.

use axum::extract::{Query, State};
use axum::Json;
use safepath_core::location::{clamp_limit, DEFAULT_ALERT_LIMIT, MAX_ALERT_LIMIT};
use safepath_db::models::zone_alert::ZoneAlert;
use safepath_db::repositories::ZoneAlertRepo;

use crate::error::AppResult;
use crate::query::AlertListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/alerts
///
/// Most recent alerts first, optionally filtered by `zoneId`.
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertListParams>,
) -> AppResult<Json<DataResponse<Vec<ZoneAlert>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_ALERT_LIMIT, MAX_ALERT_LIMIT);
    let alerts = match params.zone_id.as_deref() {
        Some(zone_id) => ZoneAlertRepo::list_by_zone(&state.pool, zone_id, limit).await?,
        None => ZoneAlertRepo::list_recent(&state.pool, limit).await?,
    };
    Ok(Json(DataResponse { data: alerts }))
}
