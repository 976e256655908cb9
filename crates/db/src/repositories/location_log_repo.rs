//! Repository for the `location_logs` table (append-only).

use sqlx::PgPool;

use crate::models::location_log::{CreateLocationLog, LocationLog};

/// Column list for `location_logs` SELECT queries.
const COLUMNS: &str = "id, latitude, longitude, network_type, speed, created_at";

/// Provides query operations for location logs.
pub struct LocationLogRepo;

impl LocationLogRepo {
    /// Insert a single location reading.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLocationLog,
    ) -> Result<LocationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO location_logs (latitude, longitude, network_type, speed) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationLog>(&query)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.network_type.as_deref())
            .bind(input.speed)
            .fetch_one(pool)
            .await
    }

    /// List the most recent readings, newest first.
    ///
    /// Ties on `created_at` (same transaction) fall back to insertion order.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<LocationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM location_logs \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, LocationLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
