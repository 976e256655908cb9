//! Validation rules for logged location readings.

use crate::error::CoreError;
use crate::geofence::zone::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// Maximum length of a `networkType` label (e.g. `"4g"`, `"wifi"`).
pub const MAX_NETWORK_TYPE_LEN: usize = 32;

/// Default and maximum number of location logs returned by a list call.
pub const DEFAULT_LOCATION_LIMIT: i64 = 100;
pub const MAX_LOCATION_LIMIT: i64 = 100;

/// Default and maximum number of zone alerts returned by a list call.
pub const DEFAULT_ALERT_LIMIT: i64 = 50;
pub const MAX_ALERT_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Validate the fields of a location reading before it is stored.
pub fn validate_reading(
    latitude: f64,
    longitude: f64,
    network_type: Option<&str>,
    speed: Option<f64>,
) -> Result<(), CoreError> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "latitude must be between -90 and 90, got {latitude}"
        )));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "longitude must be between -180 and 180, got {longitude}"
        )));
    }
    if let Some(speed) = speed {
        if !speed.is_finite() || speed < 0.0 {
            return Err(CoreError::Validation(format!(
                "speed must be a non-negative number, got {speed}"
            )));
        }
    }
    if let Some(network_type) = network_type {
        if network_type.trim().is_empty() {
            return Err(CoreError::Validation(
                "networkType must not be empty".to_string(),
            ));
        }
        if network_type.chars().count() > MAX_NETWORK_TYPE_LEN {
            return Err(CoreError::Validation(format!(
                "networkType must be at most {MAX_NETWORK_TYPE_LEN} characters"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_typical_reading() {
        assert!(validate_reading(19.07, 72.87, Some("4g"), Some(12.5)).is_ok());
        assert!(validate_reading(-90.0, 180.0, None, None).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_matches!(
            validate_reading(95.0, 0.0, None, None),
            Err(CoreError::Validation(msg)) if msg.contains("latitude")
        );
        assert_matches!(
            validate_reading(0.0, -181.0, None, None),
            Err(CoreError::Validation(msg)) if msg.contains("longitude")
        );
        assert_matches!(
            validate_reading(f64::NAN, 0.0, None, None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_bad_speed_and_network_type() {
        assert_matches!(
            validate_reading(0.0, 0.0, None, Some(-1.0)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_reading(0.0, 0.0, Some(" "), None),
            Err(CoreError::Validation(_))
        );
        let long = "x".repeat(MAX_NETWORK_TYPE_LEN + 1);
        assert_matches!(
            validate_reading(0.0, 0.0, Some(&long), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None, 100, 100), 100);
        assert_eq!(clamp_limit(Some(0), 100, 100), 1);
        assert_eq!(clamp_limit(Some(500), 100, 100), 100);
        assert_eq!(clamp_limit(Some(7), 100, 100), 7);
    }
}
