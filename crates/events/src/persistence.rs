//! Durable alert persistence service.
//!
//! [`AlertPersistence`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and writes every received [`AlertEvent`] to the `zone_alerts` table. It
//! runs as a long-lived background task and shuts down when the bus sender
//! is dropped.

use chrono::{DateTime, Utc};
use safepath_core::geofence::AlertEvent;
use safepath_core::types::{DbId, Timestamp};
use safepath_db::models::zone_alert::CreateZoneAlert;
use safepath_db::repositories::ZoneAlertRepo;
use safepath_db::DbPool;
use tokio::sync::broadcast;

/// Background service that persists zone alerts to the database.
pub struct AlertPersistence;

impl AlertPersistence {
    /// Run the persistence loop until the bus closes.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<AlertEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    tracing::info!(
                        zone_id = %event.zone_id,
                        kind = %event.kind,
                        at = event.at,
                        "Zone alert"
                    );
                    if let Err(e) = Self::persist(&pool, &event).await {
                        tracing::error!(
                            error = %e,
                            zone_id = %event.zone_id,
                            "Failed to persist zone alert"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Alert persistence lagged, some alerts were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, alert persistence shutting down");
                    break;
                }
            }
        }
    }

    async fn persist(pool: &DbPool, event: &AlertEvent) -> Result<DbId, sqlx::Error> {
        let alert = ZoneAlertRepo::insert(pool, &to_create_dto(event)).await?;
        Ok(alert.id)
    }
}

/// Map an alert to its row DTO.
///
/// Sample timestamps outside chrono's range are stored as the current time.
pub fn to_create_dto(event: &AlertEvent) -> CreateZoneAlert {
    CreateZoneAlert {
        zone_id: event.zone_id.clone(),
        kind: event.kind.as_str().to_string(),
        latitude: event.sample.lat,
        longitude: event.sample.lng,
        sample_at: millis_to_timestamp(event.at),
    }
}

fn millis_to_timestamp(millis: i64) -> Timestamp {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}
