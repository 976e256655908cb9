pub mod alerts;
pub mod health;
pub mod location;
pub mod zones;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /location                 create (POST), list recent (GET)
///
/// /zones                    configured zones with membership (GET)
/// /zones/inside             ids of zones currently inside (GET)
/// /zones/evaluate           evaluate a sample without logging it (POST)
/// /zones/reset              reset every zone (POST)
/// /zones/{id}/reset         reset one zone (POST)
///
/// /alerts                   persisted zone alerts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/location", location::router())
        .nest("/zones", zones::router())
        .nest("/alerts", alerts::router())
}
