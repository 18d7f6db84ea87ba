//! Wind group extraction: direction, speed, gust, and variation.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::{Wind, WindDirection, WindVariation};
use crate::constants::{MAX_WIND_DIRECTION_DEGREES, VARIABLE_WIND_MARKER};

/// Wind token patterns in trial order: plain, gusting, and
/// variable-direction forms, first in knots and only then in meters per
/// second. The first pattern that matches wins; no further patterns are
/// tried.
static WIND_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["KT", "MPS"]
        .iter()
        .flat_map(|unit| {
            [
                format!(r"\d{{5}}{unit}"),
                format!(r"\d{{5}}G\d{{2}}{unit}"),
                format!(r"VRB\d{{2}}{unit}"),
            ]
        })
        .map(|pattern| Regex::new(&pattern).unwrap())
        .collect()
});

/// `DDDVDDD` wind-direction variation token
static VARIATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}V\d{3}").unwrap());

/// Extract the wind group from the base text
///
/// Absent when no pattern matches at all, which covers the all-slashes
/// "data unavailable" token: slashes match no digit pattern, so an
/// unavailable reading is never mistaken for a valid one. A matched token
/// without gust or variation populates those sub-fields as absent instead
/// of failing the extraction.
pub fn extract(base_text: &str) -> Option<Wind> {
    let token = WIND_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(base_text))?
        .as_str();
    debug!("Wind token: '{token}'");

    let direction = if token.starts_with(VARIABLE_WIND_MARKER) {
        WindDirection::Variable
    } else {
        let degrees: u16 = token[0..3].parse().ok()?;
        if degrees > MAX_WIND_DIRECTION_DEGREES {
            debug!("Wind direction {degrees} out of range, treating wind as absent");
            return None;
        }
        WindDirection::Degrees(degrees)
    };

    let speed: u32 = token[3..5].parse().ok()?;

    let gust = token
        .find('G')
        .and_then(|index| token.get(index + 1..index + 3))
        .and_then(|digits| digits.parse().ok());

    Some(Wind {
        direction,
        speed,
        gust,
        variation: extract_variation(base_text),
    })
}

/// Extract the wind-direction variation bounds, searched independently of
/// the wind token itself
fn extract_variation(base_text: &str) -> Option<WindVariation> {
    let token = VARIATION_PATTERN.find(base_text)?.as_str();
    Some(WindVariation {
        from_degrees: token[0..3].parse().ok()?,
        to_degrees: token[4..7].parse().ok()?,
    })
}
