use std::sync::Arc;

use safepath_core::geofence::ProximityEvaluator;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: safepath_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The single proximity evaluator. The mutex serializes samples from
    /// concurrent requests; it is never held across an `.await`.
    pub evaluator: Arc<Mutex<ProximityEvaluator>>,
    /// Fan-out bus for zone alerts.
    pub event_bus: Arc<safepath_events::EventBus>,
}
