//! METAR Decoder Library
//!
//! A Rust library for decoding METAR aviation weather reports into
//! structured observation fields.
//!
//! This library provides tools for:
//! - Extracting forecast-change groups (TEMPO, BECMG, etc.) and deriving the
//!   base-observation text view they are stripped from
//! - Decoding observation time, station-automation flag, wind, visibility,
//!   and runway visual range from the base text
//! - Aggregating every extractor's output into a single decoded report
//! - Fetching raw reports for a station from the NOAA weather server
//!
//! Decoding is a pure computation over the report text: a field that is not
//! present in the message is a normal, representable outcome, never an error.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod decoder;
        pub mod noaa_client;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    ChangeGroups, ChangeKeyword, DecodedReport, ObservationTime, RvrEntry, Visibility, Wind,
    WindDirection, WindVariation,
};
pub use app::services::decoder::{Report, decode};
pub use app::services::noaa_client::{FetchedReport, NoaaClient};
pub use config::Config;

/// Result type alias for METAR decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR decoding operations
///
/// Field extractors never produce errors for well-formed-but-absent fields;
/// `FieldMissing` exists only for callers that require a field to be present
/// and assert that requirement through the `require_*` helpers on
/// [`DecodedReport`](app::models::DecodedReport).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The weather server has no report for the requested station
    #[error("no METAR found for station '{station}'")]
    StationNotFound { station: String },

    /// Connection to the weather server failed
    #[error("connection to METAR server failed: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The server response was not in the expected timestamp/report shape
    #[error("unreadable response for station '{station}': {message}")]
    MalformedResponse { station: String, message: String },

    /// A required report field was absent from the decoded report
    #[error("report field could not be decoded: {field}")]
    FieldMissing { field: &'static str },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Failed to render a decoded report for output
    #[error("output serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Operation interrupted before completion
    #[error("operation interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create a station-not-found error
    pub fn station_not_found(station: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
        }
    }

    /// Create a connection error with an optional transport source
    pub fn connection(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Connection {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response(station: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            station: station.into(),
            message: message.into(),
        }
    }

    /// Create a missing-field error
    pub fn field_missing(field: &'static str) -> Self {
        Self::FieldMissing { field }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "failed to serialize decoded report".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Connection {
            message: "request to METAR server failed".to_string(),
            source: Some(error),
        }
    }
}
