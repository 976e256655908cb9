use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/location`.
///
/// ```text
/// POST /     -> create_location
/// GET  /     -> list_locations
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(location::list_locations).post(location::create_location),
    )
}
