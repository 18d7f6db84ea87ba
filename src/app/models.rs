//! Core data structures for decoded METAR reports.
//!
//! Every optional field is modeled as a tagged variant (`Option`, or the
//! [`WindDirection`] enum) rather than a sentinel value, so absence is
//! explicit and exhaustively handled by callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{Error, Result};

/// Observation day and time parsed from the 6-digit-plus-`Z` token
///
/// Components are kept as the 2-digit strings they appear as in the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationTime {
    /// Day of month ("01".."31")
    pub day: String,
    /// Hour UTC ("00".."23")
    pub hour: String,
    /// Minute ("00".."59")
    pub minute: String,
}

/// Wind direction: a compass bearing or the variable-direction marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    /// Fixed direction in degrees (0-360)
    Degrees(u16),
    /// Variable direction (the `VRB` marker)
    Variable,
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindDirection::Degrees(deg) => write!(f, "{deg}°"),
            WindDirection::Variable => write!(f, "variable"),
        }
    }
}

/// Wind-direction variation bounds from a `DDDVDDD` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindVariation {
    pub from_degrees: u16,
    pub to_degrees: u16,
}

/// Decoded wind group
///
/// Speed and gust are in the unit the message used (knots or meters per
/// second); the unit suffix itself is not part of the value. A missing gust
/// or variation is a normal sub-field absence, distinct from the whole wind
/// group being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: u32,
    pub gust: Option<u32>,
    pub variation: Option<WindVariation>,
}

/// Decoded visibility group
///
/// CAVOK is reported as 9999 meters with no direction suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub distance_meters: u32,
    /// Compass suffix when the message restricts visibility to a sector
    /// (e.g. "NE")
    pub direction: Option<String>,
}

/// Runway visual range for a single runway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RvrEntry {
    /// Runway designator including its L/C/R suffix (e.g. "26" or "26R")
    pub runway: String,
    /// Visual range in meters, with any M/P qualifier prefix stripped
    pub visibility_meters: u32,
}

/// Forecast-change keywords in fixed priority order
///
/// The derived `Ord` follows the priority order used by the change-group
/// extractor: TEMPO, BECMG, GRADU, RAPID, INTER, TEND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChangeKeyword {
    Tempo,
    Becmg,
    Gradu,
    Rapid,
    Inter,
    Tend,
}

impl ChangeKeyword {
    /// All keywords in priority order
    pub const ALL: [ChangeKeyword; 6] = [
        ChangeKeyword::Tempo,
        ChangeKeyword::Becmg,
        ChangeKeyword::Gradu,
        ChangeKeyword::Rapid,
        ChangeKeyword::Inter,
        ChangeKeyword::Tend,
    ];

    /// The literal token as it appears in a METAR message
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKeyword::Tempo => "TEMPO",
            ChangeKeyword::Becmg => "BECMG",
            ChangeKeyword::Gradu => "GRADU",
            ChangeKeyword::Rapid => "RAPID",
            ChangeKeyword::Inter => "INTER",
            ChangeKeyword::Tend => "TEND",
        }
    }
}

impl fmt::Display for ChangeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map of change keywords to the verbatim text following each keyword
///
/// Empty when the report carries NOSIG or no change keyword at all.
/// Computed once at decode time and immutable afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeGroups {
    entries: BTreeMap<ChangeKeyword, String>,
}

impl ChangeGroups {
    /// Create an empty change-group map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the trailing text captured for a keyword
    pub fn insert(&mut self, keyword: ChangeKeyword, text: impl Into<String>) {
        self.entries.insert(keyword, text.into());
    }

    /// The text captured for a keyword, if that keyword matched
    pub fn get(&self, keyword: ChangeKeyword) -> Option<&str> {
        self.entries.get(&keyword).map(String::as_str)
    }

    /// True when no change keyword matched (or NOSIG suppressed them all)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keywords that matched
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over matched keywords in priority order
    pub fn iter(&self) -> impl Iterator<Item = (ChangeKeyword, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Fully decoded METAR report
///
/// Aggregate of every extractor's output. Optional fields are absent when
/// the message did not carry them (or carried them ambiguously); absence is
/// never an error at this level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedReport {
    /// Station identifier the report was filed under
    pub station: String,
    /// Server-reported timestamp, when the report came from a fetch
    pub reported_at: Option<String>,
    /// Original report text, unmodified
    pub raw_text: String,
    /// True when the observation came from an automated station
    pub auto: bool,
    /// Observation day/time, absent when zero or several time tokens exist
    pub observation_time: Option<ObservationTime>,
    /// Wind group, absent when no wind pattern matched
    pub wind: Option<Wind>,
    /// Visibility group
    pub visibility: Option<Visibility>,
    /// Runway visual range entries in order of appearance
    pub rvr: Vec<RvrEntry>,
    /// Forecast-change groups
    pub change_groups: ChangeGroups,
}

impl DecodedReport {
    /// Observation time, or `FieldMissing` when the caller requires it
    pub fn require_observation_time(&self) -> Result<&ObservationTime> {
        self.observation_time
            .as_ref()
            .ok_or_else(|| Error::field_missing("observation_time"))
    }

    /// Wind group, or `FieldMissing` when the caller requires it
    pub fn require_wind(&self) -> Result<&Wind> {
        self.wind.as_ref().ok_or_else(|| Error::field_missing("wind"))
    }

    /// Visibility group, or `FieldMissing` when the caller requires it
    pub fn require_visibility(&self) -> Result<&Visibility> {
        self.visibility
            .as_ref()
            .ok_or_else(|| Error::field_missing("visibility"))
    }
}
