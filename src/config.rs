//! Configuration management and validation.
//!
//! Provides the configuration structure for the NOAA fetch collaborator.
//! Decoding itself needs no configuration; everything here concerns how raw
//! reports are retrieved from the weather server.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, NOAA_SERVER_URL};
use crate::{Error, Result};

/// Fetch configuration for the NOAA weather server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the observation server (station files live at
    /// `<server_url>/<STATION>.TXT`)
    pub server_url: String,

    /// HTTP timeout for a single station fetch, in seconds
    pub timeout_secs: u64,

    /// User agent sent with fetch requests
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: NOAA_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with defaults overridden where provided
    ///
    /// Used by the CLI to layer `--server-url` and `--timeout` over the
    /// built-in defaults.
    pub fn with_overrides(server_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let mut config = Self::default();
        if let Some(url) = server_url {
            config.server_url = url;
        }
        if let Some(secs) = timeout_secs {
            config.timeout_secs = secs;
        }
        debug!("Fetch configuration: {:?}", config);
        config
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server_url.is_empty() {
            return Err(Error::configuration("server URL must not be empty"));
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "server URL must be an http(s) URL, got '{}'",
                self.server_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration("timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Full URL of the report file for a station
    pub fn station_url(&self, station: &str) -> String {
        format!(
            "{}/{}.TXT",
            self.server_url.trim_end_matches('/'),
            station.to_ascii_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::with_overrides(Some("http://example.com/metar".to_string()), Some(5));
        assert_eq!(config.server_url, "http://example.com/metar");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = Config::with_overrides(Some("ftp://example.com".to_string()), None);
        assert!(config.validate().is_err());

        let config = Config::with_overrides(None, Some(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_station_url_uppercases_and_joins() {
        let config = Config::with_overrides(Some("http://example.com/metar/".to_string()), None);
        assert_eq!(config.station_url("lfly"), "http://example.com/metar/LFLY.TXT");
    }
}
