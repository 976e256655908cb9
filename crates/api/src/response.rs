//! Shared response envelope types for API handlers.
//!
//! Zone and alert endpoints use a `{ "data": ... }` envelope. The location
//! endpoints keep the bare shapes the dashboard already consumes.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
