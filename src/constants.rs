//! Application constants for the METAR decoder
//!
//! This module contains the server endpoint, default values, and the METAR
//! literal tokens recognized by the decoding pipeline.

// =============================================================================
// NOAA Weather Server
// =============================================================================

/// Base URL of the NOAA observation server; reports live at
/// `<base>/<STATION>.TXT`
pub const NOAA_SERVER_URL: &str =
    "https://tgftp.nws.noaa.gov/data/observations/metar/stations";

/// Default HTTP timeout for a single station fetch, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with fetch requests
pub const DEFAULT_USER_AGENT: &str = concat!("metar_decoder/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// METAR Tokens
// =============================================================================

/// Marker for an automated (unmanned) observation
pub const AUTO_TOKEN: &str = "AUTO";

/// "No significant change" token; suppresses every change group
pub const NOSIG_TOKEN: &str = "NOSIG";

/// "Ceiling and visibility OK" token
pub const CAVOK_TOKEN: &str = "CAVOK";

/// Visibility reported for CAVOK conditions, in meters
pub const CAVOK_VISIBILITY_METERS: u32 = 9999;

/// Variable wind-direction marker in the wind token
pub const VARIABLE_WIND_MARKER: &str = "VRB";

/// Highest valid wind direction, in degrees
pub const MAX_WIND_DIRECTION_DEGREES: u16 = 360;
