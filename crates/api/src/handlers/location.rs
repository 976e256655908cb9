//! Handlers for the location log resource.
//!
//! Response shapes match what the dashboard client already consumes: a
//! `message` object on create and a bare array on list.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use safepath_core::geofence::{AlertEvent, PositionSample};
use safepath_core::location::{
    clamp_limit, validate_reading, DEFAULT_LOCATION_LIMIT, MAX_LOCATION_LIMIT,
};
use safepath_db::models::location_log::{CreateLocationLog, LocationLog};
use safepath_db::repositories::LocationLogRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::zones::evaluate_and_publish;
use crate::query::LimitParams;
use crate::state::AppState;

pub const LOCATION_SAVED_MESSAGE: &str = "Location saved successfully";

#[derive(Debug, Serialize)]
pub struct CreateLocationResponse {
    pub message: &'static str,
    /// Zone transitions caused by this reading.
    pub alerts: Vec<AlertEvent>,
}

/// POST /api/location
///
/// Store a reading, then run it through the proximity evaluator using the
/// row's server-assigned timestamp.
pub async fn create_location(
    State(state): State<AppState>,
    Json(input): Json<CreateLocationLog>,
) -> AppResult<(StatusCode, Json<CreateLocationResponse>)> {
    validate_reading(
        input.latitude,
        input.longitude,
        input.network_type.as_deref(),
        input.speed,
    )?;

    let log = LocationLogRepo::create(&state.pool, &input).await?;
    tracing::debug!(id = log.id, "Location saved");

    let sample = PositionSample::new(log.latitude, log.longitude, log.created_at.timestamp_millis());
    let alerts = evaluate_and_publish(&state, sample).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLocationResponse {
            message: LOCATION_SAVED_MESSAGE,
            alerts,
        }),
    ))
}

/// GET /api/location
///
/// Most recent readings first, at most 100.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<LocationLog>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LOCATION_LIMIT, MAX_LOCATION_LIMIT);
    let logs = LocationLogRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(logs))
}
