use std::path::PathBuf;

use safepath_core::geofence::{GeofenceError, ZoneConfig};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Optional JSON zone file. The built-in danger zone is used when unset.
    pub zones_file: Option<PathBuf>,
    /// Overrides the zone file's debounce window when set.
    pub debounce_secs: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `5000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SAFEPATH_ZONES_FILE`    | unset (built-in zone)      |
    /// | `SAFEPATH_DEBOUNCE_SECS` | unset (zone file value)    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_cors_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let zones_file = std::env::var("SAFEPATH_ZONES_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let debounce_secs = std::env::var("SAFEPATH_DEBOUNCE_SECS").ok().map(|s| {
            s.parse()
                .expect("SAFEPATH_DEBOUNCE_SECS must be a valid u64")
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            zones_file,
            debounce_secs,
        }
    }

    /// Resolve the zone configuration: the zone file if one is set, otherwise
    /// the built-in default, with the debounce override applied.
    pub fn zone_config(&self) -> Result<ZoneConfig, GeofenceError> {
        let mut zones = match &self.zones_file {
            Some(path) => ZoneConfig::load(path)?,
            None => ZoneConfig::default(),
        };
        if self.debounce_secs.is_some() {
            zones.debounce_secs = self.debounce_secs;
        }
        Ok(zones)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            zones_file: None,
            debounce_secs: None,
        }
    }

    #[test]
    fn cors_origins_are_trimmed() {
        assert_eq!(
            parse_cors_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn default_zone_config_when_no_file() {
        let zones = base().zone_config().unwrap();
        assert_eq!(zones, ZoneConfig::default());
    }

    #[test]
    fn debounce_override_wins() {
        let config = ServerConfig {
            debounce_secs: Some(12),
            ..base()
        };
        assert_eq!(config.zone_config().unwrap().debounce_secs, Some(12));
    }

    #[test]
    fn missing_zone_file_is_an_error() {
        let config = ServerConfig {
            zones_file: Some(PathBuf::from("/nonexistent/zones.json")),
            ..base()
        };
        assert!(config.zone_config().is_err());
    }
}
