//! Tests for the METAR decoding pipeline

pub mod date_time_tests;
pub mod rvr_tests;
pub mod visibility_tests;
pub mod wind_tests;

/// Reference report used across the test modules
pub const LFLY_REPORT: &str = "LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG";
