/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Sample timestamps as delivered by the sensor feed (Unix epoch, milliseconds).
pub type TimestampMillis = i64;
