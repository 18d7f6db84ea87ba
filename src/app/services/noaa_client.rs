//! NOAA weather server client.
//!
//! Fetches the raw report file for a station from the NOAA observation
//! server. Each station file has two lines: the server timestamp and the
//! METAR message itself. Fetching is the only networked collaborator of the
//! decoder; decoding accepts fetched or manually supplied text through the
//! same [`Report`] entry point.

use std::time::Duration;

use tracing::{debug, info};

use crate::app::services::decoder::Report;
use crate::config::Config;
use crate::{Error, Result};

/// Raw report retrieved from the weather server
#[derive(Debug, Clone)]
pub struct FetchedReport {
    /// Server-reported observation timestamp (first body line)
    pub reported_at: String,
    /// The METAR message (second body line)
    pub text: String,
}

/// HTTP client for the NOAA observation server
#[derive(Debug)]
pub struct NoaaClient {
    client: reqwest::Client,
    config: Config,
}

impl NoaaClient {
    /// Build a client from a validated fetch configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::connection("failed to build HTTP client", Some(e)))?;

        Ok(Self { client, config })
    }

    /// Fetch the raw report file for a station
    ///
    /// A 404 from the server means the station has no report and maps to
    /// `StationNotFound`; every other failure is a `Connection` error. The
    /// station identifier is uppercased for the request; its format is not
    /// validated here.
    pub async fn fetch(&self, station: &str) -> Result<FetchedReport> {
        let url = self.config.station_url(station);
        debug!("Fetching METAR from {url}");

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::station_not_found(station));
        }
        let response = response.error_for_status()?;

        let body = response.text().await?;
        let fetched = split_body(station, &body)?;
        info!("Fetched METAR for station {}", station.to_ascii_uppercase());
        Ok(fetched)
    }

    /// Fetch a station's report and wrap it in a [`Report`] holder ready for
    /// decoding
    pub async fn fetch_report(&self, station: &str) -> Result<Report> {
        let fetched = self.fetch(station).await?;
        Ok(Report::with_reported_at(
            station.to_ascii_uppercase(),
            fetched.reported_at,
            fetched.text,
        ))
    }
}

/// Split a station file body into its timestamp and report lines
fn split_body(station: &str, body: &str) -> Result<FetchedReport> {
    let mut lines = body.lines().map(str::trim).filter(|line| !line.is_empty());

    let reported_at = lines
        .next()
        .ok_or_else(|| Error::malformed_response(station, "response body is empty"))?;
    let text = lines
        .next()
        .ok_or_else(|| Error::malformed_response(station, "response is missing the report line"))?;

    Ok(FetchedReport {
        reported_at: reported_at.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_body_two_lines() {
        let body = "2021/03/29 22:00\nLFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG\n";
        let fetched = split_body("LFLY", body).unwrap();
        assert_eq!(fetched.reported_at, "2021/03/29 22:00");
        assert!(fetched.text.starts_with("LFLY 292200Z"));
    }

    #[test]
    fn test_split_body_missing_report_line() {
        let err = split_body("LFLY", "2021/03/29 22:00\n").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_split_body_empty() {
        let err = split_body("LFLY", "").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = Config::with_overrides(Some(String::new()), None);
        assert!(NoaaClient::new(config).is_err());
    }
}
