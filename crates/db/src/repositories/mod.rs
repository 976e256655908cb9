//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod location_log_repo;
pub mod zone_alert_repo;

pub use location_log_repo::LocationLogRepo;
pub use zone_alert_repo::ZoneAlertRepo;
