//! Repository for the `zone_alerts` table.

use sqlx::PgPool;

use crate::models::zone_alert::{CreateZoneAlert, ZoneAlert};

const COLUMNS: &str = "id, zone_id, kind, latitude, longitude, sample_at, created_at";

/// Provides query operations for persisted zone alerts.
pub struct ZoneAlertRepo;

impl ZoneAlertRepo {
    pub async fn insert(pool: &PgPool, input: &CreateZoneAlert) -> Result<ZoneAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO zone_alerts (zone_id, kind, latitude, longitude, sample_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ZoneAlert>(&query)
            .bind(&input.zone_id)
            .bind(&input.kind)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.sample_at)
            .fetch_one(pool)
            .await
    }

    /// List the most recent alerts, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ZoneAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM zone_alerts \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, ZoneAlert>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List the most recent alerts for one zone, newest first.
    pub async fn list_by_zone(
        pool: &PgPool,
        zone_id: &str,
        limit: i64,
    ) -> Result<Vec<ZoneAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM zone_alerts \
             WHERE zone_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ZoneAlert>(&query)
            .bind(zone_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
