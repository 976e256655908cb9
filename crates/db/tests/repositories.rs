//! Integration tests for the location log and zone alert repositories.

use chrono::{Duration, Utc};
use safepath_db::models::location_log::CreateLocationLog;
use safepath_db::models::zone_alert::CreateZoneAlert;
use safepath_db::repositories::{LocationLogRepo, ZoneAlertRepo};
use sqlx::PgPool;

fn reading(latitude: f64, longitude: f64) -> CreateLocationLog {
    CreateLocationLog {
        latitude,
        longitude,
        network_type: Some("4g".to_string()),
        speed: Some(12.5),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_health_check(pool: PgPool) {
    safepath_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_stored_row(pool: PgPool) {
    let log = LocationLogRepo::create(&pool, &reading(19.045, 72.85))
        .await
        .expect("insert should succeed");

    assert!(log.id > 0);
    assert_eq!(log.latitude, 19.045);
    assert_eq!(log.longitude, 72.85);
    assert_eq!(log.network_type.as_deref(), Some("4g"));
    assert_eq!(log.speed, Some(12.5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn optional_fields_may_be_null(pool: PgPool) {
    let input = CreateLocationLog {
        latitude: 1.0,
        longitude: 2.0,
        network_type: None,
        speed: None,
    };
    let log = LocationLogRepo::create(&pool, &input).await.unwrap();
    assert!(log.network_type.is_none());
    assert!(log.speed.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_recent_is_newest_first_and_limited(pool: PgPool) {
    for i in 0..5 {
        LocationLogRepo::create(&pool, &reading(10.0 + f64::from(i), 20.0))
            .await
            .unwrap();
    }

    let logs = LocationLogRepo::list_recent(&pool, 3).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0].latitude, 14.0);
    assert_eq!(logs[1].latitude, 13.0);
    assert_eq!(logs[2].latitude, 12.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_latitude_violates_check_constraint(pool: PgPool) {
    let result = LocationLogRepo::create(&pool, &reading(120.0, 0.0)).await;
    assert!(result.is_err(), "CHECK constraint should reject latitude 120");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zone_alerts_insert_and_filter(pool: PgPool) {
    let now = Utc::now();
    for (zone_id, kind, offset) in [("a", "enter", 0), ("b", "enter", 1), ("a", "exit", 2)] {
        ZoneAlertRepo::insert(
            &pool,
            &CreateZoneAlert {
                zone_id: zone_id.to_string(),
                kind: kind.to_string(),
                latitude: 19.045,
                longitude: 72.85,
                sample_at: now + Duration::seconds(offset),
            },
        )
        .await
        .unwrap();
    }

    let all = ZoneAlertRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].kind, "exit");

    let zone_a = ZoneAlertRepo::list_by_zone(&pool, "a", 10).await.unwrap();
    assert_eq!(zone_a.len(), 2);
    assert!(zone_a.iter().all(|a| a.zone_id == "a"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zone_alert_kind_is_constrained(pool: PgPool) {
    let result = ZoneAlertRepo::insert(
        &pool,
        &CreateZoneAlert {
            zone_id: "a".to_string(),
            kind: "hover".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            sample_at: Utc::now(),
        },
    )
    .await;
    assert!(result.is_err());
}
