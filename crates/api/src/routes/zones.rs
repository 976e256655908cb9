use axum::routing::{get, post};
use axum::Router;

use crate::handlers::zones;
use crate::state::AppState;

/// Routes mounted at `/zones`.
///
/// ```text
/// GET  /                -> list_zones
/// GET  /inside          -> currently_inside
/// POST /evaluate        -> evaluate
/// POST /reset           -> reset_all
/// POST /{id}/reset      -> reset_zone
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(zones::list_zones))
        .route("/inside", get(zones::currently_inside))
        .route("/evaluate", post(zones::evaluate))
        .route("/reset", post(zones::reset_all))
        .route("/{id}/reset", post(zones::reset_zone))
}
