//! METAR decoding pipeline
//!
//! This module decodes a raw METAR message into a [`DecodedReport`] through a
//! fixed sequence of field extractors over a shared [`Report`] holder.
//!
//! ## Architecture
//!
//! The pipeline is organized into one component per field:
//! - [`report`] - Report holder owning the raw and base text views
//! - [`change_groups`] - Forecast-change extraction and base-text derivation
//! - [`auto`] - Automated-station flag
//! - [`date_time`] - Observation day/time token
//! - [`wind`] - Wind direction, speed, gust, and variation
//! - [`visibility`] - Visibility distance and compass sector
//! - [`rvr`] - Runway visual range entries
//! - [`pipeline`] - Stage ordering and aggregation into the decoded report
//!
//! ## Ordering
//!
//! Change-group extraction runs first: it derives the base-observation text
//! with forecast segments stripped, and wind, visibility, and RVR must be
//! read from that base view so an embedded forecast segment is never
//! mistaken for the current observation. The auto flag and the observation
//! time are read from the raw text, which no stage rewrites.
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::app::services::decoder::{Report, decode};
//!
//! let report = Report::new("LFLY", "LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG");
//! let decoded = decode(report);
//!
//! assert!(decoded.auto);
//! assert!(decoded.change_groups.is_empty());
//! ```

pub mod auto;
pub mod change_groups;
pub mod date_time;
pub mod pipeline;
pub mod report;
pub mod rvr;
pub mod visibility;
pub mod wind;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use pipeline::decode;
pub use report::Report;
