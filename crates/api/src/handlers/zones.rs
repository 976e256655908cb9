//! Handlers for the proximity evaluator.
//!
//! Every handler touching the evaluator takes the state mutex, does its
//! synchronous work and releases it before any further `.await`.

use axum::extract::{Path, State};
use axum::Json;
use safepath_core::error::CoreError;
use safepath_core::geofence::{AlertEvent, Coordinate, PositionSample};
use safepath_core::types::TimestampMillis;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A configured zone together with its current membership.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    pub id: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub radius_degrees: f64,
    pub inside: bool,
    pub last_transition_at: Option<TimestampMillis>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsideResponse {
    pub zone_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub cleared: usize,
}

/// Body for `POST /zones/evaluate`. The timestamp defaults to server time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub timestamp_millis: Option<TimestampMillis>,
}

// ---------------------------------------------------------------------------
// Shared evaluation path
// ---------------------------------------------------------------------------

/// Feed one sample through the evaluator and publish the resulting alerts.
pub async fn evaluate_and_publish(
    state: &AppState,
    sample: PositionSample,
) -> AppResult<Vec<AlertEvent>> {
    let events = {
        let mut evaluator = state.evaluator.lock().await;
        evaluator.evaluate(&sample)?
    };

    for event in &events {
        tracing::debug!(
            zone_id = %event.zone_id,
            kind = %event.kind,
            at = event.at,
            "Zone transition"
        );
        state.event_bus.publish(event.clone());
    }

    Ok(events)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/zones
///
/// List configured zones in configuration order with membership state.
pub async fn list_zones(State(state): State<AppState>) -> Json<DataResponse<Vec<ZoneView>>> {
    let evaluator = state.evaluator.lock().await;
    let zones = evaluator
        .zones()
        .iter()
        .map(|zone| {
            let membership = evaluator.membership(&zone.id);
            ZoneView {
                id: zone.id.clone(),
                center: zone.center,
                radius_meters: zone.radius_meters,
                radius_degrees: zone.radius_degrees(),
                inside: membership.is_some_and(|m| m.inside),
                last_transition_at: membership.and_then(|m| m.last_transition_at),
            }
        })
        .collect();
    Json(DataResponse { data: zones })
}

/// GET /api/zones/inside
pub async fn currently_inside(State(state): State<AppState>) -> Json<DataResponse<InsideResponse>> {
    let zone_ids = state.evaluator.lock().await.currently_inside();
    Json(DataResponse {
        data: InsideResponse {
            zone_ids: zone_ids.into_iter().collect(),
        },
    })
}

/// POST /api/zones/evaluate
///
/// Evaluate a sample without storing a location log.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(input): Json<EvaluateRequest>,
) -> AppResult<Json<DataResponse<Vec<AlertEvent>>>> {
    let timestamp_millis = input
        .timestamp_millis
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let sample = PositionSample::new(input.lat, input.lng, timestamp_millis);
    let events = evaluate_and_publish(&state, sample).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/zones/reset
///
/// Clear membership for every zone. Emits no alerts.
pub async fn reset_all(State(state): State<AppState>) -> Json<DataResponse<ResetResponse>> {
    let cleared = state.evaluator.lock().await.reset(None);
    tracing::info!(cleared, "Reset all zone memberships");
    Json(DataResponse {
        data: ResetResponse { cleared },
    })
}

/// POST /api/zones/{id}/reset
pub async fn reset_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> AppResult<Json<DataResponse<ResetResponse>>> {
    let cleared = state.evaluator.lock().await.reset(Some(&zone_id));
    if cleared == 0 {
        return Err(CoreError::ZoneNotFound(zone_id).into());
    }
    tracing::info!(zone_id = %zone_id, "Reset zone membership");
    Ok(Json(DataResponse {
        data: ResetResponse { cleared },
    }))
}
